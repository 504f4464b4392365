//! Session Token Issuance
//!
//! A session token is an HS256 JWT with claims `{sub, email, iat, exp}`,
//! where `sub` is the user name and `exp = iat + ttl`. Tokens are not
//! stored; any holder of the secret can verify them.

use chrono::{DateTime, TimeZone, Utc};
use platform::token::TokenSigner;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User name
    pub sub: String,
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}

/// Signs and verifies session tokens
#[derive(Debug, Clone)]
pub struct SessionTokenIssuer {
    signer: TokenSigner,
    ttl_secs: i64,
}

impl SessionTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            signer: TokenSigner::new(&config.token_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for `user`, valid from `issued_at` for the configured TTL
    pub fn issue(&self, user: &User, issued_at: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = issued_at.timestamp();
        let claims = SessionClaims {
            sub: user.user_name.to_string(),
            email: user.email.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };

        let token = self.signer.sign(&claims)?;
        Ok(IssuedToken { token, claims })
    }

    /// Check signature and expiry
    ///
    /// Any failure reads as [`AuthError::InvalidCredentials`].
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        self.signer.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Session token rejected");
            AuthError::InvalidCredentials
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, user_name::UserName, user_password::{RawPassword, UserPassword},
    };

    fn user() -> User {
        let raw = RawPassword::new("senha123".to_string()).unwrap();
        User::new(
            UserName::new("joao123").unwrap(),
            Email::new("joao@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = SessionTokenIssuer::new(&AuthConfig::with_random_secret());
        let issued_at = Utc::now();

        let issued = issuer.issue(&user(), issued_at).unwrap();
        let claims = issuer.verify(&issued.token).unwrap();

        assert_eq!(claims, issued.claims);
        assert_eq!(claims.sub, "joao123");
        assert_eq!(claims.email, "joao@example.com");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issued = SessionTokenIssuer::new(&AuthConfig::with_random_secret())
            .issue(&user(), Utc::now())
            .unwrap();

        let other = SessionTokenIssuer::new(&AuthConfig::with_random_secret());
        assert!(matches!(
            other.verify(&issued.token),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = SessionTokenIssuer::new(&AuthConfig::with_random_secret());
        let issued = issuer
            .issue(&user(), Utc::now() - chrono::Duration::hours(2))
            .unwrap();

        assert!(issuer.verify(&issued.token).is_err());
    }

    #[test]
    fn test_expires_at() {
        let claims = SessionClaims {
            sub: "a".into(),
            email: "a@b.c".into(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_003_600);
    }
}
