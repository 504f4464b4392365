//! List Users Use Case
//!
//! Administrative listing. Password hashes never leave this layer.

use std::sync::Arc;

use crate::domain::entity::user::UserSummary;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> AuthResult<Vec<UserSummary>> {
        let users = self.user_repo.list_all().await?;
        Ok(users.iter().map(|user| user.summary()).collect())
    }
}
