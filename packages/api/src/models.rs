//! # Wire types for the auth API
//!
//! Every endpoint wraps its payload in the same [`ApiResponse`] envelope, and
//! the auth flows exchange three request/response shapes: credentials in,
//! token-plus-profile out, and the standalone profile from `/auth/me`.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

/// Profile of the signed-in user. Replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// New-account details for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload returned by the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_camel_case_wire_format() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"1","username":"alice","email":"alice@example.com","roles":["admin"],"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.roles, Some(vec!["admin".to_string()]));
        assert_eq!(user.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_envelope_with_nested_payload() {
        let response: ApiResponse<AuthResponse> = serde_json::from_str(
            r#"{"code":0,"message":"ok","data":{"token":"abc","user":{"id":"1","username":"alice"}}}"#,
        )
        .unwrap();
        assert_eq!(response.code, 0);
        assert_eq!(response.data.token, "abc");
        assert_eq!(response.data.user.username, "alice");
    }
}
