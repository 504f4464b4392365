//! Login Event Entity
//!
//! One audit record per successful sign-in. Append-only.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{login_event_id::LoginEventId, user_name::UserName};

#[derive(Debug, Clone)]
pub struct LoginEvent {
    pub login_event_id: LoginEventId,
    pub user_name: UserName,
    pub login_at: DateTime<Utc>,
}

impl LoginEvent {
    /// Record a login happening now
    pub fn new(user_name: UserName) -> Self {
        Self::at(user_name, Utc::now())
    }

    /// Record a login at a known instant
    pub fn at(user_name: UserName, login_at: DateTime<Utc>) -> Self {
        Self {
            login_event_id: LoginEventId::new(),
            user_name,
            login_at,
        }
    }
}
