//! Auth Service
//!
//! Built once at startup and shared through router state.
//! Holds the injected collaborators and hands them to the use cases.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::list_users::ListUsersUseCase;
use crate::application::session_token::SessionTokenIssuer;
use crate::application::sign_in::{SignInInput, SignInOutput, SignInUseCase};
use crate::application::sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
use crate::domain::entity::user::UserSummary;
use crate::domain::repository::{LoginEventRepository, UserRepository};
use crate::error::AuthResult;

pub struct AuthService<U, L>
where
    U: UserRepository,
    L: LoginEventRepository,
{
    user_repo: Arc<U>,
    login_event_repo: Arc<L>,
    token_issuer: Arc<SessionTokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<U, L> AuthService<U, L>
where
    U: UserRepository,
    L: LoginEventRepository,
{
    pub fn new(user_repo: Arc<U>, login_event_repo: Arc<L>, config: AuthConfig) -> Self {
        Self {
            user_repo,
            login_event_repo,
            token_issuer: Arc::new(SessionTokenIssuer::new(&config)),
            config: Arc::new(config),
        }
    }

    pub async fn register(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        SignUpUseCase::new(self.user_repo.clone(), self.config.clone())
            .execute(input)
            .await
    }

    pub async fn login(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        SignInUseCase::new(
            self.user_repo.clone(),
            self.login_event_repo.clone(),
            self.token_issuer.clone(),
            self.config.clone(),
        )
        .execute(input)
        .await
    }

    pub async fn list_users(&self) -> AuthResult<Vec<UserSummary>> {
        ListUsersUseCase::new(self.user_repo.clone()).execute().await
    }

    /// Issuer for downstream token verification
    pub fn token_issuer(&self) -> &SessionTokenIssuer {
        &self.token_issuer
    }
}
