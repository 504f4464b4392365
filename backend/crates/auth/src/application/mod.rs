//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_users;
pub mod service;
pub mod session_token;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use list_users::ListUsersUseCase;
pub use service::AuthService;
pub use session_token::{IssuedToken, SessionClaims, SessionTokenIssuer};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
