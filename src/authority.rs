//! Authority directory: display name to API identifier.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of the authorities document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorityEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LocalAuthorityId")]
    pub id: i64,
}

impl AuthorityEntry {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Name-ordered mapping from authority name to identifier.
///
/// Authority names are assumed unique; if a name repeats, the later entry
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityDirectory {
    entries: BTreeMap<String, i64>,
}

impl AuthorityDirectory {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Authority names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, id)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Name at a zero-based position in name order.
    pub fn nth(&self, index: usize) -> Option<(&str, i64)> {
        self.iter().nth(index)
    }
}

/// Builds an [`AuthorityDirectory`] from already-parsed authority entries.
pub fn build_authority_directory(
    entries: impl IntoIterator<Item = AuthorityEntry>,
) -> AuthorityDirectory {
    AuthorityDirectory {
        entries: entries.into_iter().map(|e| (e.name, e.id)).collect(),
    }
}
