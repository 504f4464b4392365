//! User Name Value Object
//!
//! The login handle. Unique across all users and compared verbatim
//! (no case folding, no trimming).

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// ## Invariants
    /// - Not empty and not whitespace-only
    /// - At most [`USER_NAME_MAX_LENGTH`] characters
    /// - No control characters (keeps log lines single-line)
    pub fn new(user_name: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.into();

        if user_name.trim().is_empty() {
            return Err(AppError::bad_request("User name cannot be empty")
                .with_action("Please enter a user name"));
        }

        let char_count = user_name.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, char_count
            )));
        }

        if user_name.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "User name contains invalid control characters",
            ));
        }

        Ok(Self(user_name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_user_name_valid() {
        assert_eq!(UserName::new("joao123").unwrap().as_str(), "joao123");
        assert!(UserName::new("José Silva").is_ok());
        assert!(UserName::new("a").is_ok());
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_user_name_is_kept_verbatim() {
        assert_eq!(UserName::new("Alice").unwrap().as_str(), "Alice");
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_user_name_empty() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_user_name_too_long() {
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_control_characters() {
        assert!(UserName::new("alice\nadmin").is_err());
        assert!(UserName::new("bob\u{7}").is_err());
    }
}
