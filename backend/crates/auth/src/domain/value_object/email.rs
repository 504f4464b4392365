//! Email Value Object
//!
//! Unique per user. Only presence and length are checked here;
//! deliverability is not this backend's concern.

use kernel::error::app_error::{AppError, AppResult};

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.trim().is_empty() {
            return Err(AppError::bad_request("Email cannot be empty")
                .with_action("Please enter an email address"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user+tag@example.co.pt").is_ok());
    }

    #[test]
    fn test_email_empty() {
        assert!(Email::new("").is_err());
        assert!(Email::new(" \t").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(EMAIL_MAX_LENGTH);
        assert!(Email::new(format!("{local}@example.com")).is_err());
    }

    #[test]
    fn test_email_is_kept_verbatim() {
        let email = Email::new("Joao@Example.com").unwrap();
        assert_eq!(email.as_str(), "Joao@Example.com");
    }
}
