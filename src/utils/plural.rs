//! Pluralization for log messages.

/// `""` for one, `"s"` otherwise: `plural_s(3)` -> `"s"` (3 pages).
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(1, "page")` -> `"1 page"`, `plural_count(52, "page")` -> `"52 pages"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "issue"), "0 issues");
        assert_eq!(plural_count(1, "page"), "1 page");
        assert_eq!(plural_count(52, "page"), "52 pages");
    }
}
