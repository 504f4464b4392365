//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the `AuthService` facade
//! - `infra/` - Postgres and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with unique user name and email
//! - Sign-in returning a signed, 1-hour session token (JWT, HS256)
//! - Append-only audit log of successful sign-ins
//! - Password-free user listing
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - Unknown user and wrong password are the same error
//! - Internal failures are logged in detail and reported generically

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use application::{AuthService, SessionClaims};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryAuthRepository, PgAuthRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
