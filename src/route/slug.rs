//! URL slugification.
//!
//! `"San José"` → `"san-jose"`. Steps, in order:
//!
//! 1. NFD-decompose and drop combining diacritical marks (U+0300..=U+036F)
//! 2. lowercase
//! 3. whitespace runs (the ECMAScript `\s` set) → one `-`
//! 4. drop everything outside `[a-z0-9-]`
//! 5. collapse `-` runs, trim `-` at both ends

use unicode_normalization::UnicodeNormalization;

const SEPARATOR: char = '-';

/// Turn a display name into a URL path segment.
///
/// Total: symbol-only or empty input yields an empty string.
/// Idempotent: `sanitize_for_url(sanitize_for_url(s)) == sanitize_for_url(s)`.
pub fn sanitize_for_url(text: &str) -> String {
    let lowered: String = text
        .nfd()
        .filter(|c| !is_diacritical_mark(*c))
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if is_js_whitespace(c) {
            if !in_whitespace {
                push_separator(&mut slug);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c == SEPARATOR {
            push_separator(&mut slug);
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        }
    }

    slug.trim_matches(SEPARATOR).to_string()
}

/// ECMAScript `\s`: Unicode `White_Space` plus BOM, minus U+0085 (NEL).
#[inline]
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Combining Diacritical Marks block.
#[inline]
fn is_diacritical_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Push a separator unless the slug already ends with one.
#[inline]
fn push_separator(slug: &mut String) {
    if !slug.ends_with(SEPARATOR) {
        slug.push(SEPARATOR);
    }
}
