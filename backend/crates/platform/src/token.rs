//! Signed Tokens
//!
//! HMAC-SHA256 signed JWTs. The signer knows nothing about the claims it
//! carries; callers bring their own `Serialize`/`Deserialize` claim types.
//! Claims must include a numeric `exp` (seconds since the Unix epoch).

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(err.to_string()),
        }
    }
}

/// HS256 token signer bound to one process-wide secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: no clock-skew allowance
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims` into a compact JWT
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check signature and expiry, then decode the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        let data = decode::<C>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new(b"0123456789abcdef0123456789abcdef");
        let claims = TestClaims {
            sub: "alice".to_string(),
            exp: now() + 60,
        };

        let token = signer.sign(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = signer.verify(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let signer = TokenSigner::new(b"secret-one-secret-one-secret-one");
        let other = TokenSigner::new(b"secret-two-secret-two-secret-two");
        let token = signer
            .sign(&TestClaims {
                sub: "alice".to_string(),
                exp: now() + 60,
            })
            .unwrap();

        let result = other.verify::<TestClaims>(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = TokenSigner::new(b"0123456789abcdef0123456789abcdef");
        let token = signer
            .sign(&TestClaims {
                sub: "alice".to_string(),
                exp: now() - 1,
            })
            .unwrap();

        assert!(matches!(
            signer.verify::<TestClaims>(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let signer = TokenSigner::new(b"0123456789abcdef0123456789abcdef");
        let token = signer
            .sign(&TestClaims {
                sub: "alice".to_string(),
                exp: now() + 60,
            })
            .unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = base64::Engine::encode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            format!(r#"{{"sub":"mallory","exp":{}}}"#, now() + 60),
        );
        parts[1] = &forged_payload;
        let forged = parts.join(".");

        assert!(signer.verify::<TestClaims>(&forged).is_err());
    }
}
