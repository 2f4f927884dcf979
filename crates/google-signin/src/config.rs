//! Sign-in configuration
//!
//! One [`SignInConfig`] value describes a sign-in attempt: client identity,
//! requested scopes, and the provider endpoints. The configuration is passed
//! by reference into each operation, so concurrent attempts never share
//! mutable state.

use std::collections::BTreeSet;

use common::Secret;

use crate::constants::{AUTHORIZE_ENDPOINT, PROFILE_ENDPOINT, REDIRECT_PATH, TOKEN_ENDPOINT};
use crate::error::{Error, Result};
use crate::scope::{Scope, default_scopes};

/// Provider endpoint URLs.
///
/// Defaults to Google's fixed OAuth endpoints; overridable so tests can
/// point the pipeline at a mock server. The redirect URI is deliberately
/// not here — it is always derived from the client ID.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Authorization endpoint the user-agent navigates to.
    pub authorize: String,
    /// Token endpoint for the code exchange.
    pub token: String,
    /// Userinfo endpoint for the profile fetch.
    pub profile: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize: AUTHORIZE_ENDPOINT.into(),
            token: TOKEN_ENDPOINT.into(),
            profile: PROFILE_ENDPOINT.into(),
        }
    }
}

/// Configuration for one sign-in attempt.
#[derive(Debug, Clone)]
pub struct SignInConfig {
    /// OAuth client ID of the embedding application. Must be non-empty.
    pub client_id: String,
    /// Client secret, sent only in the token exchange body.
    pub client_secret: Secret<String>,
    /// Requested scopes. An empty set falls back to
    /// `{email, openid, profile}` when the authorization URL is built.
    pub scopes: BTreeSet<Scope>,
    /// Whether to resolve the user's profile after the token exchange.
    pub fetch_profile: bool,
    /// Provider endpoints (Google's by default).
    pub endpoints: Endpoints,
}

impl SignInConfig {
    /// Configuration with the default scope set and Google endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
            scopes: default_scopes(),
            fetch_profile: true,
            endpoints: Endpoints::default(),
        }
    }

    /// The redirect URI derived from the client ID.
    ///
    /// Google's installed-app convention: reverse the dot-separated client
    /// ID components and append a fixed path. The same derivation feeds
    /// both the authorization URL and the token exchange body; the provider
    /// rejects the exchange if the two ever differ.
    pub fn redirect_uri(&self) -> String {
        let reversed = self
            .client_id
            .split('.')
            .rev()
            .collect::<Vec<_>>()
            .join(".");
        format!("{reversed}{REDIRECT_PATH}")
    }

    /// The scopes to request, substituting the default set if empty.
    pub fn effective_scopes(&self) -> BTreeSet<Scope> {
        if self.scopes.is_empty() {
            default_scopes()
        } else {
            self.scopes.clone()
        }
    }

    /// Precondition check shared by every operation that uses the client ID.
    pub(crate) fn ensure_client_id(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(Error::InvalidTokenRequest(
                "client_id must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn redirect_uri_reverses_client_id_components() {
        let config = SignInConfig::new("com.googleusercontent.apps.12345", "secret");
        assert_eq!(
            config.redirect_uri(),
            "12345.apps.googleusercontent.com:/oauth2redirect/google"
        );
    }

    #[test]
    fn redirect_uri_of_dotless_client_id_is_the_id_itself() {
        let config = SignInConfig::new("plainclientid", "secret");
        assert_eq!(
            config.redirect_uri(),
            "plainclientid:/oauth2redirect/google"
        );
    }

    #[test]
    fn empty_scope_set_falls_back_to_defaults() {
        let mut config = SignInConfig::new("id", "secret");
        config.scopes.clear();
        assert_eq!(config.effective_scopes(), default_scopes());
    }

    #[test]
    fn explicit_scopes_are_kept() {
        let mut config = SignInConfig::new("id", "secret");
        config.scopes = BTreeSet::from([Scope::Email]);
        assert_eq!(config.effective_scopes(), BTreeSet::from([Scope::Email]));
    }

    #[test]
    fn empty_client_id_fails_precondition() {
        let config = SignInConfig::new("", "secret");
        let err = config.ensure_client_id().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTokenRequest);
    }

    #[test]
    fn debug_output_redacts_client_secret() {
        let config = SignInConfig::new("id", "super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn default_endpoints_are_google() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.authorize,
            "https://accounts.google.com/o/oauth2/v2/auth"
        );
        assert_eq!(endpoints.token, "https://www.googleapis.com/oauth2/v4/token");
        assert_eq!(
            endpoints.profile,
            "https://www.googleapis.com/oauth2/v2/userinfo"
        );
    }
}
