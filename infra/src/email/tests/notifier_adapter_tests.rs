//! Tests for the notifier adapter

use std::sync::Arc;

use jb_core::services::otp::NotifierTrait;

use crate::email::mock_email::MockEmailService;
use crate::email::notifier_adapter::EmailNotifierAdapter;

#[tokio::test]
async fn test_adapter_delivers_through_email_service() {
    let service = Arc::new(MockEmailService::with_options(false, false));
    let adapter = EmailNotifierAdapter::new(service.clone());

    let result = adapter.deliver("user@example.com", "482913").await;

    assert!(result.is_ok());
    assert!(result.unwrap().starts_with("mock_"));
    let body = service.last_message_for("user@example.com").unwrap();
    assert!(body.contains("482913"));
}

#[tokio::test]
async fn test_adapter_maps_failures_to_strings() {
    let service = Arc::new(MockEmailService::with_options(false, true));
    let adapter = EmailNotifierAdapter::new(service);

    let result = adapter.deliver("user@example.com", "482913").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Simulated"));
}

#[test]
fn test_adapter_exposes_provider_name() {
    let adapter = EmailNotifierAdapter::new(Arc::new(MockEmailService::new()));
    assert_eq!(adapter.provider_name(), "Mock");
}
