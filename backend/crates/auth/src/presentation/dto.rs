//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::UserSummary;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation errors, not as body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[serde(alias = "username")]
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    pub user_name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Users
// ============================================================================

/// One entry of `GET /users`. Never carries a password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserSummary> for UserResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            user_name: summary.user_name,
            email: summary.email,
            created_at: summary.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_both_spellings() {
        let camel: RegisterRequest = serde_json::from_str(
            r#"{"userName":"joao123","email":"joao@example.com","password":"senha123"}"#,
        )
        .unwrap();
        assert_eq!(camel.user_name, "joao123");

        let legacy: RegisterRequest = serde_json::from_str(
            r#"{"username":"joao123","email":"joao@example.com","password":"senha123"}"#,
        )
        .unwrap();
        assert_eq!(legacy.user_name, "joao123");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"joao123"}"#).unwrap();
        assert_eq!(req.user_name, "joao123");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_user_response_has_no_password() {
        let response = UserResponse {
            user_name: "joao123".to_string(),
            email: "joao@example.com".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("userName").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            token: "a.b.c".to_string(),
            expires_at: Utc::now(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""token":"a.b.c""#));
        assert!(json.contains("expiresAt"));
    }
}
