//! Authorization code exchange
//!
//! POSTs the authorization code to the token endpoint and decodes the
//! snake_case JSON response. The exchange is never retried here: codes are
//! single-use on the provider side, so retry is only safe for the caller
//! after obtaining a fresh code.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SignInConfig;
use crate::error::{Error, Result};
use crate::request;

/// Response from the token endpoint.
///
/// `expires_in` is a delta in seconds from the response time, not an
/// absolute timestamp. `refresh_token` is `None` when the provider omits
/// it (it only appears on the first consent for a given client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds until the access token expires (delta, not absolute)
    pub expires_in: u64,
    pub id_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Raw granted scope string exactly as returned by the provider
    pub scope: String,
    pub token_type: String,
}

/// Exchange an authorization code for tokens.
///
/// Failure mapping: request construction → `InvalidTokenRequest`,
/// transport → `Network`, empty body → `InvalidResponse`, undecodable
/// body → `TokenDecoding`. A `TokenResponse` is only produced from a
/// complete successful decode.
pub async fn exchange_code(
    client: &reqwest::Client,
    config: &SignInConfig,
    code: &str,
) -> Result<TokenResponse> {
    let request = request::token_request(client, config, code)?;

    let response = client.execute(request).await.map_err(Error::Network)?;
    let status = response.status();
    let body = response.text().await.map_err(Error::Network)?;
    debug!(%status, bytes = body.len(), "token endpoint responded");

    if body.trim().is_empty() {
        return Err(Error::InvalidResponse);
    }

    serde_json::from_str(&body).map_err(Error::TokenDecoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_deserializes() {
        let json = r#"{
            "access_token": "at_abc",
            "expires_in": 3600,
            "id_token": "it_def",
            "refresh_token": "rt_ghi",
            "scope": "email openid profile",
            "token_type": "Bearer"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "at_abc");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.id_token, "it_def");
        assert_eq!(token.refresh_token.as_deref(), Some("rt_ghi"));
        assert_eq!(token.scope, "email openid profile");
        assert_eq!(token.token_type, "Bearer");
    }

    #[test]
    fn missing_refresh_token_decodes_to_none() {
        let json = r#"{
            "access_token": "at_abc",
            "expires_in": 3600,
            "id_token": "it_def",
            "scope": "email",
            "token_type": "Bearer"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.refresh_token, None);
    }

    #[test]
    fn missing_required_field_fails_to_decode() {
        let json = r#"{"access_token": "at_abc", "expires_in": 3600}"#;
        let result: std::result::Result<TokenResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn wrong_field_type_fails_to_decode() {
        let json = r#"{
            "access_token": "at_abc",
            "expires_in": "soon",
            "id_token": "it_def",
            "scope": "email",
            "token_type": "Bearer"
        }"#;
        let result: std::result::Result<TokenResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialization_round_trips() {
        let token = TokenResponse {
            access_token: "accessToken".into(),
            expires_in: 3600,
            id_token: "idToken".into(),
            refresh_token: Some("refreshToken".into()),
            scope: "scope".into(),
            token_type: "tokenType".into(),
        };
        let json = serde_json::to_string(&token).unwrap();
        let decoded: TokenResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn absent_refresh_token_is_omitted_when_serializing() {
        let token = TokenResponse {
            access_token: "at".into(),
            expires_in: 1,
            id_token: "it".into(),
            refresh_token: None,
            scope: "s".into(),
            token_type: "Bearer".into(),
        };
        let json = serde_json::to_string(&token).unwrap();
        assert!(!json.contains("refresh_token"));
    }
}
