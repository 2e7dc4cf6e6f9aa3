use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the Mad Mimi client.
///
/// Remote API failures reported inside a 2xx..5xx response body are *not*
/// errors at this level; bodies are returned verbatim and interpretation is
/// left to the caller. Only local validation and transport-level failures
/// surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested configuration group does not exist in the registry.
    #[error("unknown configuration group: {name}")]
    Configuration { name: String },

    /// An outgoing mail body is missing a required placeholder macro.
    #[error("mail validation error: {0}")]
    Validation(String),

    /// The underlying HTTP call failed before a body could be read.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// YAML serialization of a structured body or parsing of a registry
    /// document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a validation error.
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a configuration error for an unresolvable group name.
    pub(crate) fn unknown_group(name: impl Into<String>) -> Self {
        Error::Configuration { name: name.into() }
    }
}
