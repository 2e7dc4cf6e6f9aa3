//! Outgoing mail requests and their validation.

use crate::config::{map_of, ConfigMap};
use crate::format;
use crate::{Error, Result};

/// Placeholder the server replaces with an open-tracking image.
pub const TRACKING_BEACON: &str = "[[tracking_beacon]]";
/// Alternate open-tracking placeholder accepted in HTML bodies.
pub const PEEK_IMAGE: &str = "[[peek_image]]";
/// Placeholder the server replaces with an unsubscribe link.
pub const UNSUBSCRIBE: &str = "[[unsubscribe]]";

/// Body of an outgoing promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailBody {
    /// Raw HTML; must embed [`TRACKING_BEACON`] or [`PEEK_IMAGE`].
    RawHtml(String),
    /// Raw plain text; must embed [`UNSUBSCRIBE`].
    RawPlainText(String),
    /// Key/value pairs serialized to the block-structured (YAML) body format
    /// and substituted into the promotion template server-side.
    Structured(ConfigMap),
}

/// One outgoing promotion for [`Client::send_mail`](crate::Client::send_mail).
///
/// Parameters the API understands but this type has no named setter for
/// (e.g. `hidden`, `check_suppressed`) can be supplied with [`param`].
///
/// [`param`]: MailRequest::param
///
/// ```rust
/// use madmimi_client::MailRequest;
///
/// let request = MailRequest::new()
///     .promotion_name("signup")
///     .recipients("Andrew Edwards <andrew@example.com>")
///     .subject("Welcome")
///     .from("Example team <info@example.com>")
///     .structured_body([("username", "Andrew")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MailRequest {
    params: ConfigMap,
    body: Option<MailBody>,
}

impl MailRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the promotion template to send.
    pub fn promotion_name(self, name: impl Into<String>) -> Self {
        self.param("promotion_name", name)
    }

    /// Recipient specification, e.g. `Name <address@example.com>`.
    pub fn recipients(self, recipients: impl Into<String>) -> Self {
        self.param("recipients", recipients)
    }

    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.param("subject", subject)
    }

    /// Sender specification, e.g. `Team <info@example.com>`.
    pub fn from(self, from: impl Into<String>) -> Self {
        self.param("from", from)
    }

    /// Target a named audience list instead of the recipients field; the
    /// request then goes to the send-to-list endpoint.
    pub fn list_name(self, list_name: impl Into<String>) -> Self {
        self.param("list_name", list_name)
    }

    /// Set a free-form request parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Use a raw HTML body.
    pub fn raw_html(mut self, html: impl Into<String>) -> Self {
        self.body = Some(MailBody::RawHtml(html.into()));
        self
    }

    /// Use a raw plain-text body.
    pub fn raw_plain_text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(MailBody::RawPlainText(text.into()));
        self
    }

    /// Use a structured body, serialized to the block-structured format
    /// before transmission.
    pub fn structured_body<K, V>(mut self, body: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = Some(MailBody::Structured(map_of(body)));
        self
    }

    /// Validate the body, fold it into the parameter map, and pick the
    /// endpoint. Fails with [`Error::Validation`] before any network
    /// activity when a required placeholder macro is missing.
    pub(crate) fn into_parts(mut self) -> Result<(&'static str, ConfigMap)> {
        match self.body {
            Some(MailBody::RawHtml(html)) => {
                if !html.contains(TRACKING_BEACON) && !html.contains(PEEK_IMAGE) {
                    return Err(Error::validation(format!(
                        "include either the {TRACKING_BEACON} or the {PEEK_IMAGE} macro in your HTML"
                    )));
                }
                self.params.insert("raw_html".to_string(), html);
            }
            Some(MailBody::RawPlainText(text)) => {
                if !text.contains(UNSUBSCRIBE) {
                    return Err(Error::validation(format!(
                        "include the {UNSUBSCRIBE} macro in your text"
                    )));
                }
                self.params.insert("raw_plain_text".to_string(), text);
            }
            Some(MailBody::Structured(body)) => {
                self.params
                    .insert("body".to_string(), format::yaml_body(&body)?);
            }
            None => {}
        }

        let action = if self.params.contains_key("list_name") {
            "/mailer/to_list"
        } else {
            "/mailer"
        };
        Ok((action, self.params))
    }
}
