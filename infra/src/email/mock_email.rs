//! Mock email service implementation
//!
//! Logs verification emails to the console instead of sending them, and
//! records the last code per address so tests can complete the flow.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use sv_core::services::verification::EmailSenderTrait;
use sv_shared::utils::email::mask_email;

use crate::email::verification_text_body;

/// Mock email service for development and testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Last code sent per address
    sent_codes: Arc<Mutex<HashMap<String, String>>>,
    /// Counter for messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate delivery failures
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service with console output
    pub fn new() -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the last code sent to an address
    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                email = %mask_email(email),
                "Mock email service simulating delivery failure"
            );
            return Err("simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", email);
            println!("Message ID: {}", message_id);
            println!("Content: {}", verification_text_body(code, 10));
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_service",
            provider = "mock",
            email = %mask_email(email),
            message_id = %message_id,
            "Verification email sent (mock)"
        );

        Ok(message_id)
    }
}
