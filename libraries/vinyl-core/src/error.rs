/// Core error types for Vinyl
use thiserror::Error;

/// Result type alias using `VinylError`
pub type Result<T> = std::result::Result<T, VinylError>;

/// Failure kinds surfaced by album operations.
///
/// A lookup that matches nothing is not an error: repositories report it as
/// `None` or an empty list.
#[derive(Error, Debug)]
pub enum VinylError {
    /// Required field absent or unparsable; raised before any statement runs
    #[error("{0}")]
    Validation(String),

    /// The storage engine rejected the statement
    #[error("Storage error: {0}")]
    Storage(String),

    /// A result row could not be mapped to an album
    #[error("Decode error: {0}")]
    Decode(String),
}

impl VinylError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for VinylError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::Decode(err.to_string()),
            other => Self::Storage(other.to_string()),
        }
    }
}
