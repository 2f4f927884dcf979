//! Error types for the sign-in pipeline
//!
//! Every failure the pipeline can produce is one variant of [`Error`].
//! Transport and decode causes are kept as typed sources so diagnostics
//! survive to the caller; tests and callers compare by [`ErrorKind`]
//! instead of message text.

/// Errors from the sign-in pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The interactive user-agent step failed before producing a callback.
    /// Constructed by the embedding application from whatever its browser
    /// integration reports.
    #[error("authentication session failed: {0}")]
    Authentication(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The user closed the user-agent without completing consent.
    #[error("user cancelled the sign-in flow")]
    UserCancelled,

    /// The redirect callback URL carried no `code` query parameter.
    #[error("redirect URL contains no authorization code")]
    InvalidCode,

    /// The provider denied the request and reported it via the `error`
    /// callback parameter (e.g. `access_denied`).
    #[error("provider denied authorization: {0}")]
    ProviderDenied(String),

    /// A token or profile request could not be constructed. Also raised as
    /// the precondition failure for an empty client ID.
    #[error("invalid token request: {0}")]
    InvalidTokenRequest(String),

    /// The HTTP call failed at the transport layer (connect, TLS, DNS,
    /// timeout).
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// The HTTP call succeeded but returned no usable body.
    #[error("token endpoint returned no usable response body")]
    InvalidResponse,

    /// A body was received but did not decode into the expected value.
    /// Raised directly by the token exchange; the profile path raises it
    /// too, wrapped in `ProfileFetch`, so the message names neither body.
    #[error("response body decoding failed: {0}")]
    TokenDecoding(#[source] serde_json::Error),

    /// The profile call or its decoding failed. Wraps the underlying
    /// failure so its category remains inspectable.
    #[error("profile fetch failed: {0}")]
    ProfileFetch(#[source] Box<Error>),
}

/// Category of an [`Error`], used for comparisons.
///
/// Wrapped causes (`reqwest::Error`, `serde_json::Error`) are not `Eq`, so
/// the error enum itself cannot be. Matching on the kind gives callers and
/// tests a stable equality that never depends on OS or library message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authentication,
    UserCancelled,
    InvalidCode,
    ProviderDenied,
    InvalidTokenRequest,
    Network,
    InvalidResponse,
    TokenDecoding,
    ProfileFetch,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::UserCancelled => ErrorKind::UserCancelled,
            Error::InvalidCode => ErrorKind::InvalidCode,
            Error::ProviderDenied(_) => ErrorKind::ProviderDenied,
            Error::InvalidTokenRequest(_) => ErrorKind::InvalidTokenRequest,
            Error::Network(_) => ErrorKind::Network,
            Error::InvalidResponse => ErrorKind::InvalidResponse,
            Error::TokenDecoding(_) => ErrorKind::TokenDecoding,
            Error::ProfileFetch(_) => ErrorKind::ProfileFetch,
        }
    }

    /// The category of the failure a profile fetch wrapped, if any.
    pub fn profile_cause_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::ProfileFetch(cause) => Some(cause.kind()),
            _ => None,
        }
    }
}

/// Result alias for sign-in operations.
pub type Result<T> = std::result::Result<T, Error>;
