//! In-memory verification record store
//!
//! A process-local map satisfying the record store contract. It does not
//! survive restarts and cannot be shared across server instances, so it is
//! only suitable for single-instance deployments and tests; anything else
//! should use the Redis store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use sv_core::domain::entities::verification_record::VerificationRecord;
use sv_core::services::verification::RecordStoreTrait;

/// In-memory implementation of the verification record store
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, VerificationRecord>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records (expired-but-unreaped included)
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStoreTrait for InMemoryRecordStore {
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        self.records
            .lock()
            .map_err(|e| e.to_string())?
            .insert(email.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        Ok(self
            .records
            .lock()
            .map_err(|e| e.to_string())?
            .get(email)
            .cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        self.records
            .lock()
            .map_err(|e| e.to_string())?
            .remove(email);
        Ok(())
    }
}
