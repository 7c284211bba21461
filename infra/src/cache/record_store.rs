//! Redis-backed verification record store
//!
//! One JSON document per email under `verification:record:{email}`. Writes
//! carry a TTL slightly above the code expiry window as storage hygiene;
//! the orchestrator re-checks `expires_at` on every read, so the TTL is
//! never load-bearing for correctness.

use async_trait::async_trait;
use tracing::{debug, info};

use sv_core::domain::entities::verification_record::VerificationRecord;
use sv_core::services::verification::RecordStoreTrait;
use sv_shared::utils::email::mask_email;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Slack added to the record TTL beyond the code expiry window, so a record
/// is still present (and reported as expired, not missing) shortly after
/// `expires_at` passes
const TTL_SLACK_SECONDS: u64 = 60;

/// Redis implementation of the verification record store
#[derive(Clone)]
pub struct RedisRecordStore {
    /// Redis client for store operations
    redis_client: RedisClient,
    /// TTL applied to every record write
    ttl_seconds: u64,
}

impl RedisRecordStore {
    /// Create a new Redis record store
    ///
    /// # Arguments
    /// * `redis_client` - Redis client for store operations
    /// * `code_expiration_minutes` - The protocol's code expiry window; the
    ///   record TTL is this window plus a fixed slack
    pub fn new(redis_client: RedisClient, code_expiration_minutes: i64) -> Self {
        let ttl_seconds = (code_expiration_minutes.max(0) as u64) * 60 + TTL_SLACK_SECONDS;
        Self {
            redis_client,
            ttl_seconds,
        }
    }

    /// Format the store key for an email
    fn format_record_key(email: &str) -> String {
        format!("verification:record:{}", email)
    }

    async fn put_record(
        &self,
        email: &str,
        record: &VerificationRecord,
    ) -> Result<(), InfrastructureError> {
        let key = Self::format_record_key(email);
        let document = serde_json::to_string(record)?;

        debug!(email = %mask_email(email), "Storing verification record");

        self.redis_client
            .set_with_expiry(&key, &document, self.ttl_seconds)
            .await?;

        info!(email = %mask_email(email), "Verification record stored");
        Ok(())
    }

    async fn get_record(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, InfrastructureError> {
        let key = Self::format_record_key(email);

        match self.redis_client.get(&key).await? {
            Some(document) => {
                let record: VerificationRecord = serde_json::from_str(&document)?;
                Ok(Some(record))
            }
            None => {
                debug!(
                    email = %mask_email(email),
                    "No verification record found (absent or TTL-reaped)"
                );
                Ok(None)
            }
        }
    }

    async fn delete_record(&self, email: &str) -> Result<(), InfrastructureError> {
        let key = Self::format_record_key(email);

        debug!(email = %mask_email(email), "Deleting verification record");
        self.redis_client.delete(&key).await
    }
}

#[async_trait]
impl RecordStoreTrait for RedisRecordStore {
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        self.put_record(email, record).await.map_err(|e| e.to_string())
    }

    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        self.get_record(email).await.map_err(|e| e.to_string())
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        self.delete_record(email).await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_key() {
        assert_eq!(
            RedisRecordStore::format_record_key("founder@startup.io"),
            "verification:record:founder@startup.io"
        );
    }
}
