//! Messaging handles: `@name` or a `t.me` link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Alias, AliasKind};

static SIGIL_HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([A-Za-z0-9_]+)$").expect("handle pattern compiles"));

static HANDLE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?(?:t\.me|telegram\.me)/@?([a-z0-9_]+)/?(?:[?#].*)?$")
        .expect("handle link pattern compiles")
});

pub(super) fn parse(text: &str) -> Option<Alias> {
    let captures = SIGIL_HANDLE.captures(text).or_else(|| HANDLE_LINK.captures(text))?;
    let name = captures.get(1)?.as_str();
    Some(Alias::from_parts(AliasKind::Handle, name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigil_and_link_forms_agree() {
        let from_sigil = parse("@Some_User").unwrap();
        let from_link = parse("http://t.me/some_user").unwrap();
        let from_alt_host = parse("https://telegram.me/SOME_USER/").unwrap();
        assert_eq!(from_sigil.value(), "some_user");
        assert_eq!(from_sigil, from_link);
        assert_eq!(from_sigil, from_alt_host);
    }

    #[test]
    fn rejects_bare_sigil_and_spaces() {
        assert!(parse("@").is_none());
        assert!(parse("@two words").is_none());
        assert!(parse("some_user").is_none());
        assert!(parse("https://t.me/").is_none());
    }
}
