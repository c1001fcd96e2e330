//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The batch to sort contained no entries
    #[error("Dates list cannot be empty")]
    EmptyBatch,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if the caller caused this error (as opposed to an internal fault)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
