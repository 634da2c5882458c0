//! Alias normalization: raw reporter text in, typed alias out.
//!
//! Classification is attempted in a fixed order and the first match wins:
//!
//! 1. phone number
//! 2. profile link
//! 3. handle (`@name` or a messaging link)
//!
//! Anything else is rejected; free text never creates an object.

mod handle;
mod phone;
mod profile;

use crate::error::{CoreError, CoreResult};
use crate::model::Alias;

/// Classifies `text` as exactly one alias kind, or rejects it.
///
/// # Errors
///
/// Returns [`CoreError::UnrecognizedFormat`] when no classifier accepts the input.
pub fn normalize(text: &str) -> CoreResult<Alias> {
    let trimmed = text.trim();
    phone::parse(trimmed)
        .or_else(|| profile::parse(trimmed))
        .or_else(|| handle::parse(trimmed))
        .ok_or_else(|| CoreError::UnrecognizedFormat { input: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AliasKind;

    #[test]
    fn domestic_and_international_phones_agree() {
        let a = normalize("+7 999 888 77 66").unwrap();
        let b = normalize("89998887766").unwrap();
        let c = normalize("9998887766").unwrap();
        assert_eq!(a.kind(), AliasKind::Phone);
        assert_eq!(a.value(), "+79998887766");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn classifies_each_kind() {
        assert_eq!(normalize("@Foo").unwrap(), Alias::from_parts(AliasKind::Handle, "foo"));
        assert_eq!(
            normalize("https://t.me/Foo").unwrap(),
            Alias::from_parts(AliasKind::Handle, "foo")
        );
        assert_eq!(
            normalize("https://vk.com/Bar").unwrap(),
            Alias::from_parts(AliasKind::ProfileLink, "bar")
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize("  @foo\n").unwrap().value(), "foo");
    }

    #[test]
    fn free_text_is_rejected() {
        for input in ["", "hello world", "@", "https://example.com/someone", "12345"] {
            let err = normalize(input).unwrap_err();
            assert_eq!(err, CoreError::UnrecognizedFormat { input: input.to_string() });
        }
    }

    #[test]
    fn sigil_with_digits_is_a_handle_not_a_phone() {
        let alias = normalize("@9998887766").unwrap();
        assert_eq!(alias.kind(), AliasKind::Handle);
    }
}
