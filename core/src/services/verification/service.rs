//! Main verification service implementation

use std::sync::Arc;

use sv_shared::utils::email::mask_email;
use sv_shared::utils::validation::{normalize_email, validators};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};

use super::config::VerificationServiceConfig;
use super::traits::{EmailSenderTrait, RecordStoreTrait};
use super::types::{GenerateCodeResult, VerifyCodeResult};

/// Orchestrator for the email verification protocol
///
/// Owns the state machine per email key: NONE -> PENDING ->
/// {verified | expired | locked}. The record store holds the only state;
/// expiry and the attempt ceiling are re-evaluated on every call, so stale
/// records need no background sweep.
pub struct VerificationService<M: EmailSenderTrait, R: RecordStoreTrait> {
    /// Email sender for code delivery
    mailer: Arc<M>,
    /// Record store holding pending verifications
    store: Arc<R>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<M: EmailSenderTrait, R: RecordStoreTrait> VerificationService<M, R> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `mailer` - Email sender implementation
    /// * `store` - Record store implementation
    /// * `config` - Service configuration
    pub fn new(mailer: Arc<M>, store: Arc<R>, config: VerificationServiceConfig) -> Self {
        Self {
            mailer,
            store,
            config,
        }
    }

    /// Generate a verification code and send it to the given email
    ///
    /// A fresh record unconditionally replaces any prior record for the
    /// email, whatever state it was in: requesting a new code always
    /// restarts the cycle. If delivery fails the record is rolled back, so
    /// a code the user never received cannot sit pending until expiry.
    ///
    /// The code is never returned to the caller; it only travels in the
    /// email.
    pub async fn generate(&self, email: &str) -> DomainResult<GenerateCodeResult> {
        if !validators::not_empty(email) {
            return Err(ValidationError::EmailRequired.into());
        }
        let email = normalize_email(email);
        if !validators::is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let record = VerificationRecord::new_with_expiration(
            email.clone(),
            self.config.code_expiration_minutes,
        );

        tracing::info!(
            email = %mask_email(&email),
            event = "code_generated",
            expires_at = %record.expires_at,
            "Generated new verification code"
        );

        self.store.put(&email, &record).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "record_store_failed",
                "Failed to store verification record"
            );
            DomainError::Internal {
                message: format!("Failed to store verification record: {}", e),
            }
        })?;

        match self.mailer.send_verification_code(&email, &record.code).await {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(&email),
                    message_id = %message_id,
                    event = "code_sent",
                    "Verification code sent"
                );
                Ok(GenerateCodeResult {
                    message_id,
                    expires_at: record.expires_at,
                })
            }
            Err(e) => {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "code_delivery_failed",
                    "Failed to send verification email"
                );
                // The user never received this code; a live record would be
                // unsatisfiable until expiry.
                self.discard_record(&email).await;
                Err(VerificationError::DeliveryFailed.into())
            }
        }
    }

    /// Verify a submitted code for the given email
    ///
    /// Checks run in order: record presence, expiry, attempt ceiling, code
    /// comparison. Expiry and the ceiling are terminal for the record; a
    /// mismatch increments the attempt count and leaves the record pending.
    /// The ceiling is enforced at the start of the next call, so exactly
    /// `max_attempts` wrong guesses each report an invalid code before the
    /// record locks.
    pub async fn verify(&self, email: &str, submitted_code: &str) -> DomainResult<VerifyCodeResult> {
        if !validators::not_empty(email) {
            return Err(ValidationError::EmailRequired.into());
        }
        if !validators::not_empty(submitted_code) {
            return Err(ValidationError::CodeRequired.into());
        }
        let email = normalize_email(email);

        let record = self.store.get(&email).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "record_store_failed",
                "Failed to read verification record"
            );
            DomainError::Internal {
                message: format!("Failed to read verification record: {}", e),
            }
        })?;

        let mut record = match record {
            Some(record) => record,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "code_not_found",
                    "Verify called with no pending verification"
                );
                return Err(VerificationError::CodeNotFound.into());
            }
        };

        if record.is_expired() {
            tracing::warn!(
                email = %mask_email(&email),
                event = "code_expired",
                "Verification code expired"
            );
            self.discard_record(&email).await;
            return Err(VerificationError::CodeExpired.into());
        }

        if record.attempts_exhausted(self.config.max_attempts) {
            tracing::warn!(
                email = %mask_email(&email),
                attempts = record.attempts,
                event = "max_attempts_exceeded",
                "Attempt ceiling reached, invalidating record"
            );
            self.discard_record(&email).await;
            return Err(VerificationError::MaxAttemptsExceeded.into());
        }

        if !record.matches(submitted_code) {
            record.record_failed_attempt();
            self.store.put(&email, &record).await.map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "record_store_failed",
                    "Failed to persist attempt count"
                );
                DomainError::Internal {
                    message: format!("Failed to update verification record: {}", e),
                }
            })?;
            tracing::warn!(
                email = %mask_email(&email),
                attempts = record.attempts,
                remaining = record.remaining_attempts(self.config.max_attempts),
                event = "code_mismatch",
                "Invalid verification code submitted"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        // One-time use: the record does not survive a successful match.
        self.store.delete(&email).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "record_store_failed",
                "Failed to delete verified record"
            );
            DomainError::Internal {
                message: format!("Failed to delete verification record: {}", e),
            }
        })?;

        tracing::info!(
            email = %mask_email(&email),
            event = "code_verified",
            "Email verified successfully"
        );
        Ok(VerifyCodeResult::verified())
    }

    /// Best-effort record deletion on terminal outcomes
    ///
    /// Expired and locked records are already treated as absent at read
    /// time, so a failed delete is logged rather than surfaced.
    async fn discard_record(&self, email: &str) {
        if let Err(e) = self.store.delete(email).await {
            tracing::error!(
                email = %mask_email(email),
                error = %e,
                event = "record_discard_failed",
                "Failed to discard verification record"
            );
        }
    }
}
