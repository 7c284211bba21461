//! Resend email service implementation
//!
//! Delivers verification codes through the Resend HTTP API
//! (<https://resend.com>). Failures are reported synchronously so the
//! verification orchestrator can roll back the pending record.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use sv_core::services::verification::EmailSenderTrait;
use sv_shared::config::EmailConfig;
use sv_shared::utils::email::mask_email;

use crate::email::{verification_html_body, verification_subject, verification_text_body};
use crate::InfrastructureError;

/// Resend API endpoint for sending emails
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend email service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Resend API key
    pub api_key: String,
    /// From address (display name allowed, e.g. "StartupVista <noreply@...>")
    pub from_address: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
    /// Expiry window quoted in the email body, in minutes
    pub code_expiry_minutes: i64,
}

impl ResendConfig {
    /// Build from the shared email configuration
    pub fn from_email_config(
        config: &EmailConfig,
        code_expiry_minutes: i64,
    ) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "RESEND_API_KEY not set".to_string(),
            ));
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            request_timeout_secs: config.request_timeout_secs,
            code_expiry_minutes,
        })
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Resend implementation of the verification email sender
pub struct ResendEmailService {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend email service
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(from = %config.from_address, "Resend email service initialized");

        Ok(Self { client, config })
    }

    async fn send(&self, email: &str, code: &str) -> Result<String, InfrastructureError> {
        let html = verification_html_body(code, self.config.code_expiry_minutes);
        let text = verification_text_body(code, self.config.code_expiry_minutes);

        let request = SendEmailRequest {
            from: &self.config.from_address,
            to: [email],
            subject: verification_subject(),
            html: &html,
            text: &text,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(
                email = %mask_email(email),
                status = %status,
                "Resend API rejected the send request"
            );
            return Err(InfrastructureError::Email(format!(
                "Resend API returned {}: {}",
                status, body
            )));
        }

        let parsed: SendEmailResponse = response.json().await?;

        info!(
            email = %mask_email(email),
            message_id = %parsed.id,
            "Verification email accepted by Resend"
        );

        Ok(parsed.id)
    }
}

#[async_trait]
impl EmailSenderTrait for ResendEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.send(email, code).await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        let email_config = EmailConfig {
            provider: "resend".to_string(),
            api_key: String::new(),
            ..Default::default()
        };

        let result = ResendConfig::from_email_config(&email_config, 10);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_config_from_email_config() {
        let email_config = EmailConfig {
            provider: "resend".to_string(),
            api_key: "re_test_key".to_string(),
            ..Default::default()
        };

        let config = ResendConfig::from_email_config(&email_config, 10).unwrap();
        assert_eq!(config.api_key, "re_test_key");
        assert_eq!(config.code_expiry_minutes, 10);
    }

    #[test]
    fn test_request_serialization() {
        let request = SendEmailRequest {
            from: "StartupVista <noreply@startupvista.in>",
            to: ["founder@startup.io"],
            subject: "Your Verification Code",
            html: "<p>123456</p>",
            text: "123456",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["to"][0], "founder@startup.io");
        assert_eq!(json["subject"], "Your Verification Code");
    }
}
