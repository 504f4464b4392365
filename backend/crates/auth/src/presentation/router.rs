//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::AuthService;
use crate::domain::repository::{LoginEventRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Build the auth routes around an already constructed service
///
/// One repository value serves as both credential store and audit log.
pub fn auth_router<R>(service: Arc<AuthService<R, R>>) -> Router
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    let state = AuthAppState { service };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/users", get(handlers::list_users::<R>))
        .with_state(state)
}
