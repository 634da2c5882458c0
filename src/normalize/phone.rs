//! Phone number classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Alias, AliasKind};

const COUNTRY_DIGIT: char = '7';
const DOMESTIC_TRUNK_DIGIT: char = '8';

// ASCII digits with the usual separators, and at most one leading `+`.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 \t().\-]+$").expect("phone pattern compiles"));

/// Accepts 10-digit domestic numbers, 11-digit numbers with the domestic
/// trunk digit, and 11-digit numbers already carrying the country digit.
pub(super) fn parse(text: &str) -> Option<Alias> {
    if !PHONE_SHAPE.is_match(text) {
        return None;
    }
    let explicit_plus = text.starts_with('+');
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    let national = match (digits.len(), digits.chars().next()) {
        (10, _) if !explicit_plus => digits.as_str(),
        (11, Some(DOMESTIC_TRUNK_DIGIT)) if !explicit_plus => &digits[1..],
        (11, Some(COUNTRY_DIGIT)) => &digits[1..],
        _ => return None,
    };

    Some(Alias::from_parts(AliasKind::Phone, format!("+{COUNTRY_DIGIT}{national}")))
}
