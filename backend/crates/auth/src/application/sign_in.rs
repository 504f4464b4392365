//! Sign In Use Case
//!
//! Verifies credentials, records the login and issues a session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenIssuer;
use crate::domain::entity::login_event::LoginEvent;
use crate::domain::repository::{LoginEventRepository, UserRepository};
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign in use case
pub struct SignInUseCase<U, L>
where
    U: UserRepository,
    L: LoginEventRepository,
{
    user_repo: Arc<U>,
    login_event_repo: Arc<L>,
    token_issuer: Arc<SessionTokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<U, L> SignInUseCase<U, L>
where
    U: UserRepository,
    L: LoginEventRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        login_event_repo: Arc<L>,
        token_issuer: Arc<SessionTokenIssuer>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            login_event_repo,
            token_issuer,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.user_name.trim().is_empty() {
            return Err(AuthError::Validation("User name cannot be empty".to_string()));
        }
        if input.password.trim().is_empty() {
            return Err(AuthError::Validation("Password cannot be empty".to_string()));
        }

        // Values that could never have been registered cannot match anything
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;
        let pepper = self.config.password_pepper.clone();

        let password_valid = match &user {
            Some(user) => user.password.verify_off_thread(raw_password, pepper).await?,
            None => {
                // Pay the same Argon2 cost as a wrong password
                UserPassword::dummy()
                    .verify_off_thread(raw_password, pepper)
                    .await?;
                false
            }
        };

        let Some(user) = user.filter(|_| password_valid) else {
            tracing::debug!(user_name = %user_name, "Sign in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        // Token first, so a signing failure leaves no audit record
        let login_at = Utc::now();
        let issued = self.token_issuer.issue(&user, login_at)?;
        let expires_at = issued
            .claims
            .expires_at()
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        self.login_event_repo
            .append(&LoginEvent::at(user.user_name.clone(), login_at))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: issued.token,
            expires_at,
        })
    }
}
