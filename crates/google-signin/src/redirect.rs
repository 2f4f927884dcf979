//! Redirect callback parsing
//!
//! After consent the provider redirects the user-agent to the derived
//! redirect URI with either a `code` query parameter (success) or an
//! `error` parameter (denial). The embedding application hands that URL
//! here as an opaque string: reversed client IDs usually start with a
//! digit, which WHATWG URL parsers reject as a scheme, so the callback is
//! never forced through a full URL parse.

use crate::error::{Error, Result};

/// Extract the authorization code from a redirect callback URL.
///
/// Only the query component is inspected. A `code` parameter wins if
/// present. A provider-reported `error` parameter (e.g.
/// `error=access_denied`) maps to [`Error::ProviderDenied`]; anything
/// else, including a missing or empty query, is [`Error::InvalidCode`].
pub fn extract_code(callback_url: &str) -> Result<String> {
    let query = match callback_url.split_once('?') {
        Some((_, rest)) => rest.split('#').next().unwrap_or(""),
        None => return Err(Error::InvalidCode),
    };

    let mut denial = None;
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match name.as_ref() {
            "code" if !value.is_empty() => return Ok(value.into_owned()),
            "error" => denial = Some(value.into_owned()),
            _ => {}
        }
    }

    match denial {
        Some(reason) => Err(Error::ProviderDenied(reason)),
        None => Err(Error::InvalidCode),
    }
}
