//! Google OAuth endpoint constants
//!
//! These are the fixed endpoints of Google's OAuth 2.0 implementation.
//! The client ID and secret identify the embedding application and are
//! supplied through [`crate::SignInConfig`]; nothing here is a secret.

/// Authorization endpoint the user-agent navigates to for consent.
pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Token endpoint for the authorization code exchange.
pub const TOKEN_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v4/token";

/// Userinfo endpoint for the bearer-authenticated profile fetch.
/// The v2 endpoint returns the documented optional field set
/// (`id`, `email`, `verified_email`, `name`, `link`, `hd`, ...).
pub const PROFILE_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Path appended to the reversed client ID when deriving the redirect URI.
/// Google's installed-app flow redirects to a custom scheme built from the
/// client ID, e.g. `com.googleusercontent.apps.<id>:/oauth2redirect/google`.
pub const REDIRECT_PATH: &str = ":/oauth2redirect/google";
