//! Locale-aware string ordering for district names.
//!
//! Approximates the default collation browsers use for `localeCompare`:
//!
//! 1. primary: base letters, ignoring accents and case (`"Guácima"` ~ `"guacima"`)
//! 2. secondary: accents, unaccented first (`"Jimenez"` < `"Jiménez"`)
//! 3. tertiary: case, lowercase first (`"san"` < `"San"`)
//!
//! Without CLDR tables some orders differ from ICU:
//!
//! - Marks compare by code point at the secondary level, so grave (U+0300)
//!   sorts before acute (U+0301); ICU puts acute first.
//! - Punctuation and symbols compare by code point against letters. ICU
//!   sorts every punctuation mark before digits and letters.
//! - `Æ`, `Œ` and `ß` stay single letters sorting after `z`. ICU expands
//!   them to `ae`, `oe` and `ss`.
//!
//! Province, canton and district names in the dataset use only Spanish
//! letters, acute accents, `ü`, `ñ` and spaces, where both orders agree.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two display names the way a reader expects them sorted.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
}

/// Base letters only: decomposed, marks dropped, lowercased.
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Decomposed lowercase text, so a base letter sorts before the same letter plus a mark.
fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// One flag per character: lowercase (false) sorts before uppercase (true).
fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
