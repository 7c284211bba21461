//! Domain-specific error types and error handling.

mod types;

pub use types::{ValidationError, VerificationError};

use thiserror::Error;

/// Core domain errors
///
/// Store and sender failures are caught at the service boundary and mapped
/// into this taxonomy; no raw collaborator error reaches the caller.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
