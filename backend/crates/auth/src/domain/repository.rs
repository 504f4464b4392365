//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{login_event::LoginEvent, user::User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Credential store
///
/// Implementations own the uniqueness of user name and email:
/// `insert` must reject duplicates atomically with
/// [`AuthError::ConstraintViolation`](crate::error::AuthError::ConstraintViolation).
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user holding either the user name or the email
    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Insert a new user
    async fn insert(&self, user: User) -> AuthResult<User>;

    /// All users, in registration order
    async fn list_all(&self) -> AuthResult<Vec<User>>;
}

/// Login audit log
#[trait_variant::make(LoginEventRepository: Send)]
pub trait LocalLoginEventRepository {
    /// Append a login event
    async fn append(&self, event: &LoginEvent) -> AuthResult<()>;
}
