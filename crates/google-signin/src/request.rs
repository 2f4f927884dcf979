//! Request construction
//!
//! Pure builders for the three provider interactions: the authorization
//! URL the user-agent navigates to, the token exchange POST, and the
//! bearer-authenticated profile GET. No I/O happens here; the clients in
//! [`crate::token`] and [`crate::profile`] execute what is built.

use url::Url;

use crate::config::SignInConfig;
use crate::error::{Error, Result};
use crate::scope::join_scopes;

/// Build the authorization URL for the consent step.
///
/// Query parameters: `client_id`, the derived `redirect_uri`,
/// `response_type=code`, and `scope` (sorted, joined with `+`). Fails only
/// when the client ID is empty — callers must set it before starting a
/// sign-in.
pub fn authorization_url(config: &SignInConfig) -> Result<Url> {
    config.ensure_client_id()?;

    let url = format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
        config.endpoints.authorize,
        config.client_id,
        urlencoded(&config.redirect_uri()),
        join_scopes(&config.effective_scopes()),
    );

    Url::parse(&url).map_err(|e| Error::InvalidTokenRequest(format!("authorization URL: {e}")))
}

/// Build the token exchange request.
///
/// POST with an `application/x-www-form-urlencoded` body carrying the
/// client credentials, the authorization code, and the same derived
/// redirect URI the authorization URL used.
pub fn token_request(
    client: &reqwest::Client,
    config: &SignInConfig,
    code: &str,
) -> Result<reqwest::Request> {
    config.ensure_client_id()?;

    let redirect_uri = config.redirect_uri();
    client
        .post(&config.endpoints.token)
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.expose().as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .build()
        .map_err(|e| Error::InvalidTokenRequest(format!("token request: {e}")))
}

/// Build the profile fetch request, authenticated with the access token.
pub fn profile_request(
    client: &reqwest::Client,
    config: &SignInConfig,
    access_token: &str,
) -> Result<reqwest::Request> {
    client
        .get(&config.endpoints.profile)
        .bearer_auth(access_token)
        .build()
        .map_err(|e| Error::InvalidTokenRequest(format!("profile request: {e}")))
}

/// Minimal URL encoding for parameter values.
/// Only encodes characters that would break URL parameter parsing.
fn urlencoded(s: &str) -> String {
    s.replace(' ', "%20")
        .replace(':', "%3A")
        .replace('/', "%2F")
}
