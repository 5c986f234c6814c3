//! GameKey: sanitized identifier selecting which roster a request addresses.

use std::fmt;

/// Storage key for one game, derived from a user- or route-supplied name by
/// stripping every character outside `[A-Za-z0-9_-]`. Two raw names that
/// sanitize to the same key address the same roster (collision is accepted,
/// not prevented).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GameKey(String);

impl GameKey {
    pub fn from_raw(raw: &str) -> Self {
        let safe = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        Self(safe)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
