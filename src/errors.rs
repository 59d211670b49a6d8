use thiserror::Error;

/// Errors produced by media store operations.
///
/// Both variants carry the message that is surfaced verbatim in the
/// HTTP error body; the mapping to status codes lives in the handler
/// layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Malformed, missing, or conflicting input (HTTP 400)
    #[error("{0}")]
    Validation(String),

    /// Referenced user or item absent (HTTP 404)
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    /// Creates a Validation error with a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a NotFound error with a message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type for media store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
