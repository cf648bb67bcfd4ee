//! Credential handling for the session token.
//!
//! The token is the only secret the client holds. It is wrapped so it
//! never ends up in logs by accident.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs or storage.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl Serialize for SecureString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecureString)
    }
}

/// Header name/value pair ready to attach to a request.
pub type AuthHeader = (&'static str, String);

/// Build the `Authorization` header for a session token.
///
/// Returns `None` for an empty token so a blank value never reaches the wire.
pub fn build_auth_header(scheme: &str, token: &SecureString) -> Option<AuthHeader> {
    if token.is_empty() {
        return None;
    }
    Some(("Authorization", format!("{} {}", scheme, token.expose())))
}
