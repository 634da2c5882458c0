//! Social-network profile links.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Alias, AliasKind};

static PROFILE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.|m\.)?vk\.(?:com|ru)/([a-z0-9_.]+)/?(?:[?#].*)?$")
        .expect("profile pattern compiles")
});

pub(super) fn parse(text: &str) -> Option<Alias> {
    let captures = PROFILE_URL.captures(text)?;
    let segment = captures.get(1)?.as_str().trim_matches('.');
    if segment.is_empty() {
        return None;
    }
    Some(Alias::from_parts(AliasKind::ProfileLink, segment.to_lowercase()))
}
