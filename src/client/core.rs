use crate::client::builder::ClientBuilder;
use crate::client::mail::MailRequest;
use crate::config::{map_of, ConfigMap};
use crate::format;
use crate::transport::{HttpTransport, Method, Security};
use crate::Result;

/// Synchronous Mad Mimi API client.
///
/// Immutable after construction; every operation performs exactly one HTTP
/// round trip and returns the raw response body without interpreting it.
#[derive(Debug)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// The merged configuration this client sends with every request.
    pub fn config(&self) -> &ConfigMap {
        self.transport.config()
    }

    /// Send a promotion, to the recipients named in the request or to an
    /// audience list when [`MailRequest::list_name`] is set.
    ///
    /// Always an authenticated POST over TLS. Fails with
    /// [`Error::Validation`](crate::Error::Validation) before any network
    /// activity when the body is missing a required placeholder macro.
    pub fn send_mail(&self, request: MailRequest) -> Result<String> {
        let (action, params) = request.into_parts()?;
        self.transport
            .send(action, &params, Method::Post, Security::Tls)
    }

    /// Create a new audience list.
    pub fn add_list(&self, list_name: &str) -> Result<String> {
        self.transport.send(
            "/audience_lists",
            &map_of([("name", list_name)]),
            Method::Post,
            Security::Plain,
        )
    }

    /// Add one address to a named audience list.
    pub fn add_list_member(&self, list_name: &str, email: &str) -> Result<String> {
        let action = format!("/audience_lists/{list_name}/add");
        self.transport.send(
            &action,
            &map_of([("email", email)]),
            Method::Get,
            Security::Plain,
        )
    }

    /// Bulk-import audience members.
    ///
    /// Records share the column set of the first record; see
    /// [`format::member_csv`] for the exact CSV contract.
    pub fn add_member(&self, records: &[ConfigMap]) -> Result<String> {
        self.transport.send(
            "/audience_members",
            &map_of([("csv_file", format::member_csv(records))]),
            Method::Post,
            Security::Plain,
        )
    }
}
