use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A generated identifier.
///
/// Ids of up to 23 bytes (the default 21-symbol id included) are stored
/// inline without a heap allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NanoId(SmolStr);

impl NanoId {
    pub(crate) fn new(id: String) -> Self {
        Self(SmolStr::from(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols in the id.
    ///
    /// This is the requested length, which differs from the byte length for
    /// alphabets with non-ASCII symbols.
    pub fn symbol_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0.into()
    }
}

impl std::fmt::Debug for NanoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NanoId").field(&self.0).finish()
    }
}

impl Display for NanoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NanoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NanoId {
    fn eq(&self, other: &str) -> bool {
        self.0.as_str() == other
    }
}

impl PartialEq<&str> for NanoId {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_str() == *other
    }
}

impl From<NanoId> for String {
    fn from(id: NanoId) -> Self {
        id.into_string()
    }
}
