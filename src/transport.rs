//! Shared HTTP request sender.
//!
//! Every public operation funnels into [`HttpTransport::send`]: merge the
//! stored configuration under the call's parameters, build the endpoint URL,
//! issue one GET or POST, and hand the raw body back. No status-code
//! interpretation happens here; a 4xx/5xx body is returned like any other.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::config::{merged, ConfigMap};
use crate::Result;

/// Fixed API host all requests target unless a base URL override is set.
pub const API_HOST: &str = "api.madmimi.com";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Transport security for a request. The API requires TLS for mail
/// submission and plain HTTP for the audience endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    Plain,
    Tls,
}

/// Errors raised by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The blocking HTTP sender shared by all client operations.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    config: ConfigMap,
    base_url_override: Option<String>,
}

impl HttpTransport {
    pub(crate) fn new(
        config: ConfigMap,
        timeout: Duration,
        verify_tls: bool,
        base_url_override: Option<String>,
    ) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().timeout(timeout);

        if !verify_tls {
            // Reproduces the historical behavior of the service's first-party
            // clients. Off by default; see `ClientBuilder::danger_disable_tls_verification`.
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(TransportError::Http)?;

        Ok(Self {
            client,
            config,
            base_url_override,
        })
    }

    /// The configuration merged into every request.
    pub(crate) fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Send one request and return the raw response body.
    ///
    /// Caller parameters win over stored configuration on key collision.
    /// GET places the merged parameters in the query string; POST form-encodes
    /// them into the body.
    pub(crate) fn send(
        &self,
        action: &str,
        params: &ConfigMap,
        method: Method,
        security: Security,
    ) -> Result<String> {
        let params = merged(self.config.clone(), params.clone());
        let url = self.endpoint_url(action, security)?;

        debug!(?method, %url, "sending request");

        let request = match method {
            Method::Get => self.client.get(url).query(&params),
            Method::Post => self.client.post(url).form(&params),
        };

        let response = request.send().map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.text().map_err(TransportError::Http)?;

        debug!(%status, bytes = body.len(), "received response");

        Ok(body)
    }

    fn endpoint_url(&self, action: &str, security: Security) -> Result<Url> {
        let url = match &self.base_url_override {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), action),
            None => {
                let scheme = match security {
                    Security::Tls => "https",
                    Security::Plain => "http",
                };
                format!("{scheme}://{API_HOST}{action}")
            }
        };
        let url = Url::parse(&url).map_err(TransportError::Url)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::map_of;

    fn transport(base_url_override: Option<String>) -> HttpTransport {
        HttpTransport::new(
            map_of([("username", "info@example.com")]),
            Duration::from_secs(5),
            true,
            base_url_override,
        )
        .unwrap()
    }

    #[test]
    fn endpoint_url_scheme_follows_security_flag() {
        let transport = transport(None);
        assert_eq!(
            transport
                .endpoint_url("/mailer", Security::Tls)
                .unwrap()
                .as_str(),
            "https://api.madmimi.com/mailer"
        );
        assert_eq!(
            transport
                .endpoint_url("/audience_lists", Security::Plain)
                .unwrap()
                .as_str(),
            "http://api.madmimi.com/audience_lists"
        );
    }

    #[test]
    fn endpoint_url_override_replaces_scheme_and_host() {
        let transport = transport(Some("http://127.0.0.1:8080/".to_string()));
        assert_eq!(
            transport
                .endpoint_url("/mailer", Security::Tls)
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/mailer"
        );
    }

    #[test]
    fn endpoint_url_rejects_unparseable_overrides() {
        let transport = transport(Some("not a url".to_string()));
        let result = transport.endpoint_url("/mailer", Security::Plain);
        assert!(matches!(
            result,
            Err(crate::Error::Transport(TransportError::Url(_)))
        ));
    }
}
