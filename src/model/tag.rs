//! Tag names and per-object tag counts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tag name that has been validated against the configured catalog.
///
/// Only [`crate::catalog::TagCatalog`] hands these out.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the canonical spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many times a tag was applied to an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// Canonical tag name.
    pub name: String,
    /// Number of contributions.
    pub count: u64,
}

impl TagCount {
    /// Sorts by count descending, then name, the order objects display tags in.
    pub fn sort_for_display(counts: &mut [TagCount]) {
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    }
}
