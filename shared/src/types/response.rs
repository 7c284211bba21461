//! API response envelopes
//!
//! The verification endpoint speaks a fixed wire shape: `{"success": true}`
//! (optionally with a `message`) on success, `{"error": "..."}` on failure.

use serde::{Deserialize, Serialize};

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable message (present on some successes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Create a bare success response
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a success response with a message
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message, surfaced verbatim to the client
    pub error: String,
}

impl ErrorBody {
    /// Create an error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_message() {
        let json = serde_json::to_string(&ApiResponse::success()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_success_with_message() {
        let json =
            serde_json::to_string(&ApiResponse::success_with_message("Email verified successfully"))
                .unwrap();
        assert!(json.contains("Email verified successfully"));
    }

    #[test]
    fn test_error_body() {
        let json = serde_json::to_string(&ErrorBody::new("Invalid verification code")).unwrap();
        assert_eq!(json, r#"{"error":"Invalid verification code"}"#);
    }
}
