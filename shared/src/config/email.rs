//! Outbound email configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the verification email sender
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("resend" or "mock")
    pub provider: String,

    /// API key for the provider
    pub api_key: String,

    /// From address used for verification emails
    pub from_address: String,

    /// Timeout for provider API requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            from_address: String::from("StartupVista <noreply@startupvista.in>"),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// `EMAIL_PROVIDER` selects the sender ("resend" or "mock", default
    /// "mock"); `RESEND_API_KEY` and `EMAIL_FROM` configure the Resend
    /// client.
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("RESEND_API_KEY").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "StartupVista <noreply@startupvista.in>".to_string()),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        }
    }

    /// Whether the mock sender should be used
    pub fn use_mock(&self) -> bool {
        self.provider.eq_ignore_ascii_case("mock")
    }
}

fn default_request_timeout() -> u64 {
    30
}
