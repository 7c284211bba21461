//! DTOs for the email verification endpoint

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/email-verification
///
/// A single endpoint serves both operations, selected by `action`:
///
/// ```json
/// { "email": "founder@startup.io", "action": "generate" }
/// { "email": "founder@startup.io", "action": "verify", "code": "123456" }
/// ```
///
/// Presence checks are done in the handler so missing fields produce the
/// documented `{"error": "..."}` body rather than a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificationRequest {
    /// Email address to verify
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Operation to perform: "generate" or "verify"
    #[serde(default)]
    pub action: Option<String>,

    /// Submitted verification code (verify action only)
    #[serde(default)]
    pub code: Option<String>,
}
