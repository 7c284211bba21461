//! Error type definitions for the email verification flow
//!
//! Error messages are user-facing: the registration form surfaces them
//! verbatim, so each variant carries its final wording.

use thiserror::Error;

/// Verification flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("No verification code found for this email")]
    CodeNotFound,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Too many failed attempts. Please request a new code")]
    MaxAttemptsExceeded,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Failed to send verification email")]
    DeliveryFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Verification code is required")]
    CodeRequired,

    #[error("Invalid email format")]
    InvalidEmail,
}
