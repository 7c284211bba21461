//! Traits for email delivery and record store integration

use async_trait::async_trait;

use crate::domain::entities::verification_record::VerificationRecord;

/// Trait for the verification email sender
#[async_trait]
pub trait EmailSenderTrait: Send + Sync {
    /// Deliver a verification code to the given address; returns a provider
    /// message id on success
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Trait for the verification record store
///
/// Keyed durable storage with one record per email. `put` is a total
/// overwrite; last write wins. No cross-request locking is assumed.
#[async_trait]
pub trait RecordStoreTrait: Send + Sync {
    /// Store a record, replacing any existing record for that email
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String>;

    /// Fetch the record for an email, if one exists
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String>;

    /// Delete the record for an email (no-op if absent)
    async fn delete(&self, email: &str) -> Result<(), String>;
}

// Delegation impls so implementations selected at runtime can be boxed.

#[async_trait]
impl EmailSenderTrait for Box<dyn EmailSenderTrait> {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        (**self).send_verification_code(email, code).await
    }
}

#[async_trait]
impl RecordStoreTrait for Box<dyn RecordStoreTrait> {
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        (**self).put(email, record).await
    }

    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        (**self).get(email).await
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        (**self).delete(email).await
    }
}
