//! Error types for jamf-rename-core.

use thiserror::Error;

/// All errors that can arise from a call against the Jamf API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The server answered with a status other than the one the endpoint promises.
    #[error("unexpected status {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON shape (includes missing fields).
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection, TLS, or timeout failure before a status was received.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl RemoteError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while assembling a [`crate::JamfConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid server URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("server URL '{0}' cannot carry a path")]
    OpaqueUrl(String),
}
