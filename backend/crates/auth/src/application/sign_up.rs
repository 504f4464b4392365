//! Sign Up Use Case
//!
//! Registers a new user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
///
/// Deliberately carries nothing about the stored credential.
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_name: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate all fields before touching the store
        let user_name = UserName::new(input.user_name)?;
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self
            .user_repo
            .find_by_user_name_or_email(&user_name, &email)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUser);
        }

        let password = UserPassword::hash(raw_password, self.config.password_pepper.clone()).await?;

        let user = self
            .user_repo
            .insert(User::new(user_name, email, password))
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration
                AuthError::ConstraintViolation => AuthError::DuplicateUser,
                other => other,
            })?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_name: user.user_name.into_inner(),
        })
    }
}
