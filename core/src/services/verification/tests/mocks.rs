//! Mock implementations for testing the verification service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::services::verification::traits::{EmailSenderTrait, RecordStoreTrait};

// Mock email sender for testing
pub struct MockEmailSender {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockEmailSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailSender {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("email service error".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", email))
    }
}

// Mock record store for testing
pub struct MockRecordStore {
    pub records: Arc<Mutex<HashMap<String, VerificationRecord>>>,
    pub should_fail: bool,
}

impl MockRecordStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn get_record(&self, email: &str) -> Option<VerificationRecord> {
        self.records.lock().unwrap().get(email).cloned()
    }

    /// Rewrite a stored record's expiry, for expiry-path tests
    pub fn expire_record(&self, email: &str) {
        if let Some(record) = self.records.lock().unwrap().get_mut(email) {
            record.expires_at = chrono::Utc::now() - chrono::Duration::seconds(1);
        }
    }
}

#[async_trait]
impl RecordStoreTrait for MockRecordStore {
    async fn put(&self, email: &str, record: &VerificationRecord) -> Result<(), String> {
        if self.should_fail {
            return Err("record store error".to_string());
        }
        self.records
            .lock()
            .unwrap()
            .insert(email.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        if self.should_fail {
            return Err("record store error".to_string());
        }
        Ok(self.records.lock().unwrap().get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("record store error".to_string());
        }
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}
