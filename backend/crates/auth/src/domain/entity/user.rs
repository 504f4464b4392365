//! User Entity
//!
//! A registered identity. Created once at sign-up and never modified.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
///
/// Carries the password hash, so it must never be serialized to a client
/// as-is. Use [`User::summary`] for outward listings.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    /// Unique email address
    pub email: Email,
    /// Argon2id hash
    pub password: UserPassword,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// Password-free view of a [`User`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, email: Email, password: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            user_name: self.user_name.to_string(),
            email: self.email.to_string(),
            created_at: self.created_at,
        }
    }
}
