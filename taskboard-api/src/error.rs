//! Error types for the taskboard API client

use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors raised by the API client.
///
/// Every variant displays as a single human-readable message. Callers
/// surface that message and never branch on HTTP status codes; the status
/// is folded into the message here and nowhere else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. The message is the
    /// `error` field of the response body when present, otherwise the HTTP
    /// status line.
    #[error("{message}")]
    Server { message: String },

    /// The request never completed: connection failure, timeout, or the
    /// body could not be read.
    #[error("{message}")]
    Transport { message: String },

    /// The response body did not match the expected shape, including
    /// unknown status or priority values.
    #[error("{message}")]
    Decode { message: String },
}

impl ApiError {
    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}
