//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{AuthService, SignInInput, SignUpInput};
use crate::domain::repository::{LoginEventRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    pub service: Arc<AuthService<R, R>>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Unwrap a JSON body, reporting unreadable bodies as validation errors
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AuthResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AuthError::Validation(rejection.body_text()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    let req = json_body(body)?;

    state
        .service
        .register(SignUpInput {
            user_name: req.user_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    let req = json_body(body)?;

    let output = state
        .service
        .login(SignInInput {
            user_name: req.user_name,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.session_token,
        expires_at: output.expires_at,
    }))
}

// ============================================================================
// Users
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + LoginEventRepository + Send + Sync + 'static,
{
    let users = state.service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
