//! Sign-in orchestration
//!
//! Composes redirect parsing, the code exchange, and the best-effort
//! profile fetch into one call. The orchestrator holds no state across
//! invocations; each `handle_redirect` is an independent pipeline over the
//! injected HTTP client and configuration.

use tracing::warn;
use url::Url;

use crate::config::SignInConfig;
use crate::error::Result;
use crate::profile::{Profile, fetch_profile};
use crate::redirect::extract_code;
use crate::request::authorization_url;
use crate::token::{TokenResponse, exchange_code};

/// Outcome of a completed sign-in: the token result, plus the profile when
/// it was requested and the fetch succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInResult {
    pub token: TokenResponse,
    pub profile: Option<Profile>,
}

/// Signs the user in with Google using the OAuth 2.0 Authorization Code
/// grant.
///
/// The embedding application presents the authorization URL in its own
/// user-agent, obtains the redirect callback URL, and hands it to
/// [`handle_redirect`](GoogleSignIn::handle_redirect). Cancelling either
/// network call is dropping the returned future; timeouts belong to the
/// injected [`reqwest::Client`].
pub struct GoogleSignIn {
    client: reqwest::Client,
    config: SignInConfig,
}

impl GoogleSignIn {
    /// Orchestrator with a default HTTP client.
    pub fn new(config: SignInConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Orchestrator with a caller-configured HTTP client (timeouts,
    /// proxies, TLS settings).
    pub fn with_client(config: SignInConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SignInConfig {
        &self.config
    }

    /// The URL to present in the user-agent for consent.
    ///
    /// Fails with `InvalidTokenRequest` when the client ID is empty — the
    /// precondition is checked here, before any UI or network activity.
    pub fn authorization_url(&self) -> Result<Url> {
        authorization_url(&self.config)
    }

    /// Complete the sign-in from a redirect callback URL.
    ///
    /// The callback is taken as an opaque string because custom-scheme
    /// redirect URIs derived from a client ID are not always parseable as
    /// WHATWG URLs. Extracts the authorization code, exchanges it for
    /// tokens, and, if profile fetching is enabled, resolves the user's
    /// profile with the access token. The token path short-circuits on the
    /// first failure. The profile fetch is best-effort: on failure the
    /// sign-in still succeeds with `profile: None` and the cause is logged.
    pub async fn handle_redirect(&self, callback_url: &str) -> Result<SignInResult> {
        let code = extract_code(callback_url)?;
        let token = exchange_code(&self.client, &self.config, &code).await?;

        let profile = if self.config.fetch_profile {
            match fetch_profile(&self.client, &self.config, &token.access_token).await {
                Ok(profile) => Some(profile),
                Err(error) => {
                    warn!(%error, "profile fetch failed, completing sign-in without profile");
                    None
                }
            }
        } else {
            None
        };

        Ok(SignInResult { token, profile })
    }
}
