//! Profile fetch
//!
//! GETs the userinfo endpoint with the access token obtained from the
//! exchange. Every field of the response is optional per Google's
//! documented contract; absence is never an error. Every failure on this
//! path is wrapped as [`Error::ProfileFetch`] so the orchestrator can
//! apply its best-effort policy without losing the underlying category.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SignInConfig;
use crate::error::{Error, Result};
use crate::request;

/// The authenticated user's profile.
///
/// Field names follow the `oauth2/v2/userinfo` wire contract. `id` is the
/// provider's obfuscated user identifier, `hd` the hosted G Suite domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Fetch the profile of the user the access token belongs to.
///
/// Same transport/decode mapping as the code exchange, with every failure
/// wrapped as `ProfileFetch`.
pub async fn fetch_profile(
    client: &reqwest::Client,
    config: &SignInConfig,
    access_token: &str,
) -> Result<Profile> {
    fetch_inner(client, config, access_token)
        .await
        .map_err(|e| Error::ProfileFetch(Box::new(e)))
}

async fn fetch_inner(
    client: &reqwest::Client,
    config: &SignInConfig,
    access_token: &str,
) -> Result<Profile> {
    let request = request::profile_request(client, config, access_token)?;

    let response = client.execute(request).await.map_err(Error::Network)?;
    let status = response.status();
    let body = response.text().await.map_err(Error::Network)?;
    debug!(%status, bytes = body.len(), "profile endpoint responded");

    if body.trim().is_empty() {
        return Err(Error::InvalidResponse);
    }

    serde_json::from_str(&body).map_err(Error::TokenDecoding)
}
