//! Verification record entity for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Maximum number of failed verification attempts tolerated per code
pub const MAX_ATTEMPTS: i32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Pending email verification record
///
/// One record exists per email address at a time; issuing a new code
/// replaces the previous record entirely. The record is deleted on every
/// terminal outcome (successful verification, expiry, attempt ceiling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Email address being verified (store key)
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Number of failed verification attempts made against this code
    pub attempts: i32,

    /// Timestamp when the record was created (audit only)
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a new verification record with a random 6-digit code and the
    /// default expiration window
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification record with a custom expiration window
    ///
    /// # Arguments
    ///
    /// * `email` - The email address the code will be sent to
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            email,
            code,
            attempts: 0,
            created_at: now,
            expires_at,
        }
    }

    /// Generates a random 6-digit code from the OS CSPRNG
    ///
    /// Uses `OsRng` so the code is not predictable by an external observer.
    /// The modulo introduces a negligible bias for 6-digit codes.
    fn generate_code() -> String {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the attempt ceiling has been reached
    pub fn attempts_exhausted(&self, ceiling: i32) -> bool {
        self.attempts >= ceiling
    }

    /// Gets the number of remaining verification attempts against the ceiling
    pub fn remaining_attempts(&self, ceiling: i32) -> i32 {
        (ceiling - self.attempts).max(0)
    }

    /// Compares a submitted code against the stored code in constant time
    ///
    /// Does not mutate the record; attempt accounting is the orchestrator's
    /// responsibility.
    pub fn matches(&self, submitted_code: &str) -> bool {
        if self.code.len() != submitted_code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted_code.as_bytes())
    }

    /// Registers a failed verification attempt
    pub fn record_failed_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_verification_record() {
        let email = "founder@startup.io".to_string();
        let record = VerificationRecord::new(email.clone());

        assert_eq!(record.email, email);
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert_eq!(record.attempts, 0);
        assert!(!record.is_expired());
        assert!(!record.attempts_exhausted(MAX_ATTEMPTS));
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = VerificationRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code is numeric");
            assert!(num < 1_000_000);
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100)
            .map(|_| VerificationRecord::generate_code())
            .collect();

        // Extremely unlikely to collide on every draw
        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_matches_is_exact() {
        let record = VerificationRecord::new("founder@startup.io".to_string());
        assert!(record.matches(&record.code));
        assert!(!record.matches("000000"));
        assert!(!record.matches(&record.code[..5]));
        assert!(!record.matches(""));
    }

    #[test]
    fn test_record_failed_attempt() {
        let mut record = VerificationRecord::new("founder@startup.io".to_string());

        record.record_failed_attempt();
        record.record_failed_attempt();
        assert_eq!(record.attempts, 2);
        assert_eq!(record.remaining_attempts(MAX_ATTEMPTS), 1);
        assert!(!record.attempts_exhausted(MAX_ATTEMPTS));

        record.record_failed_attempt();
        assert!(record.attempts_exhausted(MAX_ATTEMPTS));
        assert_eq!(record.remaining_attempts(MAX_ATTEMPTS), 0);
    }

    #[test]
    fn test_custom_expiration() {
        let record =
            VerificationRecord::new_with_expiration("founder@startup.io".to_string(), 30);

        let expected_expiration = record.created_at + Duration::minutes(30);
        assert_eq!(record.expires_at, expected_expiration);
    }

    #[test]
    fn test_is_expired() {
        let mut record = VerificationRecord::new("founder@startup.io".to_string());
        record.expires_at = Utc::now() - Duration::seconds(1);

        assert!(record.is_expired());
        assert_eq!(record.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_time_until_expiration() {
        let record = VerificationRecord::new("founder@startup.io".to_string());

        let remaining = record.time_until_expiration();
        assert!(remaining <= Duration::minutes(DEFAULT_EXPIRATION_MINUTES));
        assert!(remaining > Duration::minutes(DEFAULT_EXPIRATION_MINUTES - 1));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = VerificationRecord::new("founder@startup.io".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: VerificationRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
