//! UI state for the email verification widget on the registration form.
//!
//! The widget itself carries no business logic: it tracks whether the code
//! prompt is open, whether a request is in flight, and whether verification
//! has completed, so the enclosing registration form can decide when final
//! submission is unblocked. Failure messages from the verification service
//! are surfaced verbatim.

/// State machine for the registration form's verification widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationWidget {
    open: bool,
    in_flight: bool,
    is_verified: bool,
    error: Option<String>,
}

impl VerificationWidget {
    /// Create a widget in its initial state: prompt closed, nothing verified
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the email has been verified (the form reads this to unblock
    /// final submission)
    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    /// Whether the code prompt is visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a generate/verify request is currently in flight
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Last error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the "verify email" trigger is enabled
    ///
    /// Disabled once verified and while a request is in flight.
    pub fn can_request_code(&self) -> bool {
        !self.is_verified && !self.in_flight
    }

    /// Whether the code submission button is enabled
    pub fn can_submit_code(&self) -> bool {
        self.open && !self.is_verified && !self.in_flight
    }

    /// Begin a code request; returns false if the trigger is disabled
    pub fn begin_request(&mut self) -> bool {
        if !self.can_request_code() {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// A code was sent; open the prompt for input
    pub fn code_sent(&mut self) {
        self.in_flight = false;
        self.open = true;
    }

    /// Begin a code submission; returns false if submission is disabled
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit_code() {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Verification succeeded: latch the verified flag and close the prompt
    pub fn verified(&mut self) {
        self.in_flight = false;
        self.open = false;
        self.is_verified = true;
        self.error = None;
    }

    /// A request failed; the message is displayed without modification
    pub fn failed(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.error = Some(message.into());
    }

    /// Close the prompt without verifying
    pub fn dismiss(&mut self) {
        self.open = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let widget = VerificationWidget::new();
        assert!(!widget.is_verified());
        assert!(!widget.is_open());
        assert!(widget.can_request_code());
        assert!(!widget.can_submit_code());
    }

    #[test]
    fn test_request_then_submit_flow() {
        let mut widget = VerificationWidget::new();

        assert!(widget.begin_request());
        assert!(widget.is_in_flight());
        // No double-submission while a request is in flight
        assert!(!widget.begin_request());

        widget.code_sent();
        assert!(widget.is_open());
        assert!(widget.can_submit_code());

        assert!(widget.begin_submit());
        widget.verified();
        assert!(widget.is_verified());
        assert!(!widget.is_open());
    }

    #[test]
    fn test_trigger_disabled_after_verification() {
        let mut widget = VerificationWidget::new();
        widget.begin_request();
        widget.code_sent();
        widget.begin_submit();
        widget.verified();

        assert!(!widget.can_request_code());
        assert!(!widget.begin_request());
        assert!(!widget.can_submit_code());
    }

    #[test]
    fn test_failure_surfaces_message_verbatim() {
        let mut widget = VerificationWidget::new();
        widget.begin_request();
        widget.code_sent();
        widget.begin_submit();
        widget.failed("Invalid verification code");

        assert!(!widget.is_verified());
        assert!(widget.is_open());
        assert_eq!(widget.error(), Some("Invalid verification code"));
        // The user may try again
        assert!(widget.can_submit_code());
    }

    #[test]
    fn test_error_cleared_on_next_attempt() {
        let mut widget = VerificationWidget::new();
        widget.begin_request();
        widget.code_sent();
        widget.begin_submit();
        widget.failed("Verification code has expired");

        assert!(widget.begin_request());
        assert_eq!(widget.error(), None);
    }

    #[test]
    fn test_dismiss_closes_prompt() {
        let mut widget = VerificationWidget::new();
        widget.begin_request();
        widget.code_sent();
        widget.dismiss();

        assert!(!widget.is_open());
        assert!(!widget.is_verified());
        assert!(widget.can_request_code());
    }
}
