//! The closed set of tag categories reporters may apply.
//!
//! The ledgers never hard-code category names; they receive a catalog built
//! from configuration and reject anything outside it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CoreError, CoreResult};
use crate::model::TagName;

/// A single category as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    /// Canonical name, e.g. `Business`.
    pub name: String,
    /// Emoji shown next to the name.
    #[serde(default = "default_emoji")]
    pub emoji: String,
}

fn default_emoji() -> String {
    "🏷".to_string()
}

/// Reasons a configured category list is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No categories were configured.
    #[error("tag catalog is empty")]
    Empty,

    /// A category name is empty or whitespace.
    #[error("tag catalog contains a blank name")]
    BlankName,

    /// Two categories differ only in case or surrounding whitespace.
    #[error("tag catalog lists {name:?} more than once")]
    Duplicate {
        /// The second spelling encountered.
        name: String,
    },
}

/// Validated list of tag categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCatalog {
    entries: Vec<TagDefinition>,
}

impl TagCatalog {
    /// Builds a catalog, rejecting empty lists, blank names, and names that
    /// collide case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn new(entries: Vec<TagDefinition>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        for entry in &entries {
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(CatalogError::BlankName);
            }
            if seen.contains(&key) {
                return Err(CatalogError::Duplicate { name: entry.name.clone() });
            }
            seen.push(key);
        }
        Ok(Self { entries })
    }

    /// Resolves a reporter-supplied name to its canonical spelling.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownTag`] when the name is not in the catalog.
    pub fn lookup(&self, name: &str) -> CoreResult<TagName> {
        let needle = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.trim().to_lowercase() == needle)
            .map(|entry| TagName::new(entry.name.trim()))
            .ok_or_else(|| CoreError::UnknownTag { name: name.to_string() })
    }

    /// Emoji for a tag, or the generic label when the tag is not configured
    /// (e.g. it was removed from the catalog after being applied).
    #[must_use]
    pub fn emoji_for(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.name.trim() == name)
            .map_or("🏷", |entry| entry.emoji.as_str())
    }

    /// All configured categories, in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[TagDefinition] {
        &self.entries
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        let entries = [
            ("Business", "💼"),
            ("Criminal", "🔫"),
            ("Police", "👮"),
            ("Frivolous", "👱"),
            ("Scammer", "⚠️"),
        ]
        .into_iter()
        .map(|(name, emoji)| TagDefinition { name: name.to_string(), emoji: emoji.to_string() })
        .collect();
        Self { entries }
    }
}
