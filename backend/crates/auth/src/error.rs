//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Caller-facing message for every internal failure
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing, empty or oversized input
    #[error("{0}")]
    Validation(String),

    /// User name or email already registered
    #[error("User already exists")]
    DuplicateUser,

    /// Unknown user or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Store rejected an insert on a uniqueness constraint
    #[error("Uniqueness constraint violated")]
    ConstraintViolation,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateUser | AuthError::ConstraintViolation => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateUser | AuthError::ConstraintViolation => ErrorKind::Conflict,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay server-side.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(msg) => AppError::bad_request(msg.clone()),
            AuthError::DuplicateUser | AuthError::ConstraintViolation => {
                AppError::conflict(AuthError::DuplicateUser.to_string())
                    .with_action("Please choose a different user name or email")
            }
            AuthError::InvalidCredentials => AppError::unauthorized(self.to_string()),
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal(INTERNAL_MESSAGE)
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    /// Client errors raised by value objects become validation errors,
    /// everything else is internal.
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (
                AuthError::Validation("User name cannot be empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::DuplicateUser, StatusCode::CONFLICT),
            (AuthError::ConstraintViolation, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                AuthError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Internal("signing failed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let app_err = AuthError::Internal("secret key missing".into()).to_app_error();
        assert_eq!(app_err.message(), "Internal server error");

        let app_err = AuthError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app_err.message(), "Internal server error");
    }

    #[test]
    fn test_constraint_violation_reads_as_duplicate() {
        let app_err = AuthError::ConstraintViolation.to_app_error();
        assert_eq!(app_err.kind(), ErrorKind::Conflict);
        assert_eq!(app_err.message(), "User already exists");
        assert!(app_err.action().is_some());

        let app_err = AuthError::InvalidCredentials.to_app_error();
        assert_eq!(app_err.status_code(), 401);
        assert!(app_err.action().is_none());
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Email cannot be empty").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Email cannot be empty"));

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
