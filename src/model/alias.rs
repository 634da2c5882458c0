//! Typed, normalized identity references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host used to rebuild canonical profile URLs.
pub const PROFILE_HOST: &str = "vk.com";

/// The family an alias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasKind {
    /// International phone number, stored as `+` followed by digits.
    Phone,
    /// Messaging handle, stored without the `@` sigil.
    Handle,
    /// Social-network profile, stored as the lower-cased path segment.
    ProfileLink,
}

impl AliasKind {
    /// Stable storage tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Handle => "handle",
            Self::ProfileLink => "profile_link",
        }
    }

    /// Inverse of [`AliasKind::as_str`].
    #[must_use]
    pub fn from_storage(tag: &str) -> Option<Self> {
        match tag {
            "phone" => Some(Self::Phone),
            "handle" => Some(Self::Handle),
            "profile_link" => Some(Self::ProfileLink),
            _ => None,
        }
    }
}

/// A normalized alias. Unique per `(kind, value)` across the whole store.
///
/// Callers outside the crate obtain aliases only from
/// [`crate::normalize::normalize`]:
///
/// ```compile_fail
/// use repute::model::{Alias, AliasKind};
///
/// let raw = Alias::from_parts(AliasKind::Handle, "FOO");
/// ```
///
/// ```
/// let alias = repute::normalize("@FOO").unwrap();
/// assert_eq!(alias.value(), "foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Alias {
    kind: AliasKind,
    value: String,
}

impl Alias {
    /// Rebuilds an alias from parts that are already normalized, such as a
    /// row read back from a store. Raw input goes through
    /// [`crate::normalize::normalize`] instead.
    pub(crate) fn from_parts(kind: AliasKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }

    /// The alias family.
    #[must_use]
    pub fn kind(&self) -> AliasKind {
        self.kind
    }

    /// The normalized value (no sigil, no host).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Human-readable form used as the title of a freshly created object.
    #[must_use]
    pub fn title(&self) -> String {
        match self.kind {
            AliasKind::Phone => self.value.clone(),
            AliasKind::Handle => format!("@{}", self.value),
            AliasKind::ProfileLink => format!("https://{PROFILE_HOST}/{}", self.value),
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AliasKind::Phone => f.write_str(&self.value),
            AliasKind::Handle => write!(f, "@{}", self.value),
            AliasKind::ProfileLink => write!(f, "{PROFILE_HOST}/{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_tags_round_trip() {
        for kind in [AliasKind::Phone, AliasKind::Handle, AliasKind::ProfileLink] {
            assert_eq!(AliasKind::from_storage(kind.as_str()), Some(kind));
        }
        assert_eq!(AliasKind::from_storage("email"), None);
    }

    #[test]
    fn titles_and_display_forms() {
        let handle = Alias::from_parts(AliasKind::Handle, "foo");
        assert_eq!(handle.title(), "@foo");
        assert_eq!(handle.to_string(), "@foo");

        let profile = Alias::from_parts(AliasKind::ProfileLink, "bar");
        assert_eq!(profile.title(), "https://vk.com/bar");
        assert_eq!(profile.to_string(), "vk.com/bar");

        let phone = Alias::from_parts(AliasKind::Phone, "+79998887766");
        assert_eq!(phone.title(), "+79998887766");
    }
}
