//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;
use thiserror::Error;

/// Minimum signing secret length (HS256 key should match the hash size)
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;

/// Session token lifetime
pub const SESSION_TOKEN_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Token secret must be at least {min} bytes (got {actual})")]
    TokenSecretTooShort { min: usize, actual: usize },
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Process-wide secret for signing session tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: Vec<u8>) -> Result<Self, ConfigError> {
        if token_secret.len() < MIN_TOKEN_SECRET_LENGTH {
            return Err(ConfigError::TokenSecretTooShort {
                min: MIN_TOKEN_SECRET_LENGTH,
                actual: token_secret.len(),
            });
        }

        Ok(Self {
            token_secret,
            token_ttl: SESSION_TOKEN_TTL,
            password_pepper: None,
        })
    }

    /// Config with a random signing secret (tests and throwaway runs)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(MIN_TOKEN_SECRET_LENGTH),
            token_ttl: SESSION_TOKEN_TTL,
            password_pepper: None,
        }
    }

    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.password_pepper = Some(pepper);
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Get session token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_long_secret() {
        assert_eq!(
            AuthConfig::new(vec![7u8; 16]).unwrap_err(),
            ConfigError::TokenSecretTooShort { min: 32, actual: 16 }
        );

        let config = AuthConfig::new(vec![7u8; 32]).unwrap();
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.token_ttl_secs(), 3600);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.token_secret, config2.token_secret);
        assert_eq!(config1.token_secret.len(), MIN_TOKEN_SECRET_LENGTH);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::new(b"super-secret-signing-key-material".to_vec())
            .unwrap()
            .with_pepper(b"pepper".to_vec());
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
