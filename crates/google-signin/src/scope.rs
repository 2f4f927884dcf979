//! OAuth scopes requested during sign-in

use std::collections::BTreeSet;
use std::fmt;

/// A Google sign-in OAuth 2.0 scope.
///
/// `Ord` is derived so a `BTreeSet<Scope>` iterates in a fixed order and
/// the serialized `scope` query parameter is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    Email,
    OpenId,
    Profile,
}

impl Scope {
    /// Wire value sent in the authorization request.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Email => "email",
            Scope::OpenId => "openid",
            Scope::Profile => "profile",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scope set used when the caller requests none.
pub fn default_scopes() -> BTreeSet<Scope> {
    BTreeSet::from([Scope::Email, Scope::OpenId, Scope::Profile])
}

/// Join a scope set with `+` for the authorization URL query.
///
/// Google documents `+` (or `%20`) as the separator between scope values.
pub fn join_scopes(scopes: &BTreeSet<Scope>) -> String {
    scopes
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join("+")
}
