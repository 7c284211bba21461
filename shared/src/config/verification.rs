//! Verification protocol configuration module

use serde::{Deserialize, Serialize};

/// Expiry and attempt limits for the email verification protocol
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes before an issued code expires
    pub code_expiration_minutes: i64,

    /// Maximum tolerated wrong-code attempts before a record is invalidated
    pub max_attempts: i32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: 10,
            max_attempts: 3,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    ///
    /// `OTP_EXPIRY_MINUTES` (default 10) and `MAX_VERIFICATION_ATTEMPTS`
    /// (default 3).
    pub fn from_env() -> Self {
        Self {
            code_expiration_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_attempts: std::env::var("MAX_VERIFICATION_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_config_default() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_expiration_minutes, 10);
        assert_eq!(config.max_attempts, 3);
    }
}
