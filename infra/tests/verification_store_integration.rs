//! Integration tests running the verification service against the real
//! in-memory store and mock email sender.
//!
//! The Redis-backed store shares its contract with the in-memory store and
//! is exercised against a live server in deployment environments.

use std::sync::Arc;

use sv_core::errors::{DomainError, VerificationError};
use sv_core::services::verification::{VerificationService, VerificationServiceConfig};
use sv_infra::cache::InMemoryRecordStore;
use sv_infra::email::MockEmailService;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn make_service(
    mailer: Arc<MockEmailService>,
    store: Arc<InMemoryRecordStore>,
) -> VerificationService<MockEmailService, InMemoryRecordStore> {
    VerificationService::new(mailer, store, VerificationServiceConfig::default())
}

#[tokio::test]
async fn test_full_verification_cycle() {
    init_tracing();
    let mailer = Arc::new(MockEmailService::with_options(false, false));
    let store = Arc::new(InMemoryRecordStore::new());
    let service = make_service(mailer.clone(), store.clone());

    service.generate("founder@startup.io").await.unwrap();
    assert_eq!(store.len(), 1);

    let code = mailer.get_sent_code("founder@startup.io").unwrap();
    let result = service.verify("founder@startup.io", &code).await.unwrap();
    assert_eq!(result.message, "Email verified successfully");

    // Terminal outcome removes the record
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_delivery_failure_leaves_no_record() {
    init_tracing();
    let mailer = Arc::new(MockEmailService::with_options(false, true));
    let store = Arc::new(InMemoryRecordStore::new());
    let service = make_service(mailer, store.clone());

    let result = service.generate("founder@startup.io").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::DeliveryFailed))
    ));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_regenerate_keeps_single_record_per_email() {
    init_tracing();
    let mailer = Arc::new(MockEmailService::with_options(false, false));
    let store = Arc::new(InMemoryRecordStore::new());
    let service = make_service(mailer.clone(), store.clone());

    service.generate("founder@startup.io").await.unwrap();
    service.generate("founder@startup.io").await.unwrap();
    service.generate("founder@startup.io").await.unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(mailer.get_message_count(), 3);

    // Only the latest issued code satisfies the record
    let code = mailer.get_sent_code("founder@startup.io").unwrap();
    service.verify("founder@startup.io", &code).await.unwrap();
    assert!(store.is_empty());
}
