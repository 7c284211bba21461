//! Email address helpers

/// Mask an email address for logging
///
/// Shows the first character of the local part and the full domain, so log
/// lines stay correlatable without exposing the address.
///
/// ```
/// use sv_shared::utils::email::mask_email;
/// assert_eq!(mask_email("founder@startup.io"), "f***@startup.io");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("founder@startup.io"), "f***@startup.io");
        assert_eq!(mask_email("a@b.co"), "a***@b.co");
    }

    #[test]
    fn test_mask_email_degenerate_inputs() {
        assert_eq!(mask_email("@startup.io"), "***@startup.io");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
