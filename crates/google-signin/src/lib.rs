//! Google sign-in via the OAuth 2.0 Authorization Code grant
//!
//! Client side of the Authorization Code flow against Google's fixed
//! endpoints. The crate builds the authorization URL, parses the
//! provider's redirect callback, exchanges the authorization code for
//! tokens, and resolves the user's profile best-effort. Presenting the
//! user-agent and persisting tokens are the embedding application's
//! concerns.
//!
//! Sign-in flow:
//! 1. Build a [`SignInConfig`] with the app's client ID and secret
//! 2. Present [`GoogleSignIn::authorization_url`] in a user-agent
//! 3. The provider redirects to `<reversed-client-id>:/oauth2redirect/google`
//! 4. Hand the callback URL to [`GoogleSignIn::handle_redirect`]
//! 5. Receive a [`SignInResult`] with tokens and (best-effort) the profile

pub mod config;
pub mod constants;
pub mod error;
pub mod profile;
pub mod redirect;
pub mod request;
pub mod scope;
pub mod signin;
pub mod token;

pub use config::{Endpoints, SignInConfig};
pub use error::{Error, ErrorKind, Result};
pub use profile::{Profile, fetch_profile};
pub use redirect::extract_code;
pub use request::{authorization_url, profile_request, token_request};
pub use scope::Scope;
pub use signin::{GoogleSignIn, SignInResult};
pub use token::{TokenResponse, exchange_code};
