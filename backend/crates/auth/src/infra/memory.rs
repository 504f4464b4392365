//! In-Memory Repository Implementation
//!
//! Process-local store for tests and local runs. Uniqueness is enforced
//! under the write lock, so concurrent inserts cannot both succeed.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{login_event::LoginEvent, user::User};
use crate::domain::repository::{LoginEventRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    login_events: Vec<LoginEvent>,
}

/// In-memory credential store and login audit log
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the audit log
    pub async fn login_events(&self) -> Vec<LoginEvent> {
        self.state.read().await.login_events.clone()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| &u.user_name == user_name || &u.email == email)
            .cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn insert(&self, user: User) -> AuthResult<User> {
        let mut state = self.state.write().await;
        if state
            .users
            .iter()
            .any(|u| u.user_name == user.user_name || u.email == user.email)
        {
            return Err(AuthError::ConstraintViolation);
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> AuthResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }
}

impl LoginEventRepository for InMemoryAuthRepository {
    async fn append(&self, event: &LoginEvent) -> AuthResult<()> {
        self.state.write().await.login_events.push(event.clone());
        Ok(())
    }
}
