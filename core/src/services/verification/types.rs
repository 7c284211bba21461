//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of generating and sending a verification code
///
/// The code itself is never part of the result; it only travels over the
/// notification channel.
#[derive(Debug, Clone)]
pub struct GenerateCodeResult {
    /// The provider message id for the delivery
    pub message_id: String,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Confirmation message for the caller
    pub message: String,
}

impl VerifyCodeResult {
    pub(crate) fn verified() -> Self {
        Self {
            message: "Email verified successfully".to_string(),
        }
    }
}
