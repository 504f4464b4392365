//! Server Configuration
//!
//! Read once from the environment at startup. Any problem here is fatal.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub addr: SocketAddr,
    /// CORS origins; `None` allows any origin
    pub frontend_origins: Option<Vec<String>>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let secret_b64 = lookup("AUTH_TOKEN_SECRET")
            .filter(|s| !s.trim().is_empty())
            .context("AUTH_TOKEN_SECRET must be set")?;
        let secret = platform::crypto::from_base64(&secret_b64)
            .context("AUTH_TOKEN_SECRET must be valid base64")?;

        let mut auth = AuthConfig::new(secret).context("AUTH_TOKEN_SECRET is unusable")?;
        if let Some(pepper) = lookup("AUTH_PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            auth = auth.with_pepper(pepper.into_bytes());
        }

        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be a positive integer");
        }

        let port = match lookup("PORT") {
            Some(v) => v.parse().context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            database_url,
            database_max_connections,
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            frontend_origins,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // 32 bytes of 'k'
    const SECRET_B64: &str = "a2tra2tra2tra2tra2tra2tra2tra2tra2tra2tra2s=";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", SECRET_B64),
            ("DATABASE_URL", "postgres://localhost/auth"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3001);
        assert_eq!(config.database_max_connections, 5);
        assert!(config.frontend_origins.is_none());
        assert_eq!(config.auth.token_secret, vec![b'k'; 32]);
        assert!(config.auth.pepper().is_none());
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let err = ServerConfig::from_lookup(lookup(&[(
            "DATABASE_URL",
            "postgres://localhost/auth",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("AUTH_TOKEN_SECRET"));

        let err = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", "  "),
            ("DATABASE_URL", "postgres://localhost/auth"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("AUTH_TOKEN_SECRET"));
    }

    #[test]
    fn test_short_secret_is_fatal() {
        let result = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", "c2hvcnQ="),
            ("DATABASE_URL", "postgres://localhost/auth"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", SECRET_B64),
            ("AUTH_PASSWORD_PEPPER", "pimenta"),
            ("DATABASE_URL", "postgres://localhost/auth"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("ServerConfig"));
        assert!(!debug.contains("kkkk"));
        assert!(!debug.contains("pimenta"));
    }

    #[test]
    fn test_blank_frontend_origins_allow_any() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", SECRET_B64),
            ("DATABASE_URL", "postgres://localhost/auth"),
            ("FRONTEND_ORIGINS", " , "),
        ]))
        .unwrap();
        assert!(config.frontend_origins.is_none());
    }

    #[test]
    fn test_missing_database_url_is_fatal() {
        let err = ServerConfig::from_lookup(lookup(&[("AUTH_TOKEN_SECRET", SECRET_B64)]))
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("AUTH_TOKEN_SECRET", SECRET_B64),
            ("AUTH_PASSWORD_PEPPER", "pimenta"),
            ("DATABASE_URL", "postgres://localhost/auth"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("PORT", "8080"),
            ("FRONTEND_ORIGINS", "https://app.example.com, ,https://admin.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(
            config.frontend_origins,
            Some(vec![
                "https://app.example.com".to_string(),
                "https://admin.example.com".to_string()
            ])
        );
        assert_eq!(config.auth.pepper(), Some(b"pimenta".as_slice()));
    }
}
