use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned identifier of an artwork.
///
/// The server derives it from the title and artist, so it is stable across
/// fetches and safe to use as the identity of a list row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ArtworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArtworkId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ArtworkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
