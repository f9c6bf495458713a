//! Error types for the application layer

use taskboard_api::ApiError;
use thiserror::Error;

/// Result type for controller commands
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced by controller commands. Both variants display as a
/// single message suitable for direct rendering.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation failure. Blocks the network call entirely; the
    /// server never sees it.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Normalized API failure.
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl AppError {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Whether this failure was caught locally, before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Required { .. })
    }
}
