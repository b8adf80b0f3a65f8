use serde::{Deserialize, Serialize};

/// Response body from `POST /v2/auth/credentials`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent requests; absent on some failure modes
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Response body from `GET /v2/auth/whoami`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Username the token belongs to
    pub username: String,
    /// Whether the username is registered for T3+ endpoints
    #[serde(default)]
    pub has_t3plus: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_deserializes_token() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"abc123"}"#).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn auth_response_tolerates_missing_token() {
        let response: AuthResponse = serde_json::from_str("{}").unwrap();
        assert!(response.access_token.is_none());
    }

    #[test]
    fn identity_defaults_t3plus_to_false() {
        let identity: Identity =
            serde_json::from_str(r#"{"username":"user@example.com"}"#).unwrap();
        assert_eq!(identity.username, "user@example.com");
        assert!(!identity.has_t3plus);
    }
}
