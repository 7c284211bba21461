//! Email service module - verification code delivery
//!
//! Implementations of the core `EmailSenderTrait`:
//! - `ResendEmailService` - production delivery via the Resend API
//! - `MockEmailService` - logs instead of sending, for development and tests

pub mod mock_email;
pub mod resend;

pub use mock_email::MockEmailService;
pub use resend::{ResendConfig, ResendEmailService};

/// Subject line for verification code emails
pub fn verification_subject() -> &'static str {
    "Your Verification Code"
}

/// Plain-text body for a verification code email
pub fn verification_text_body(code: &str, expiry_minutes: i64) -> String {
    format!(
        "Your verification code is: {}. It will expire in {} minutes.\n\
         If you didn't request this code, you can safely ignore this email.",
        code, expiry_minutes
    )
}

/// HTML body for a verification code email
pub fn verification_html_body(code: &str, expiry_minutes: i64) -> String {
    format!(
        r#"<div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>Verification Code</h2>
  <p>Your verification code is: <strong>{code}</strong></p>
  <p>This code will expire in {expiry_minutes} minutes.</p>
  <p>If you didn't request this code, you can safely ignore this email.</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies_carry_code_and_expiry() {
        let text = verification_text_body("123456", 10);
        assert!(text.contains("123456"));
        assert!(text.contains("10 minutes"));

        let html = verification_html_body("123456", 10);
        assert!(html.contains("<strong>123456</strong>"));
        assert!(html.contains("expire in 10 minutes"));
    }
}
