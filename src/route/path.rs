//! Page URLs for the province → canton → district hierarchy.
//!
//! - Builders (`province_url`, ...): fixed `/codigo-postal/...` template
//! - [`UrlPath`]: decoded page path used by the generator (output files, breadcrumbs, sitemap)

use super::sanitize_for_url;
use std::sync::Arc;

use serde::Serialize;

/// First segment of every generated postal code page.
const ROOT_SEGMENT: &str = "codigo-postal";

/// `/codigo-postal/<province>/`
pub fn province_url(province: &str) -> String {
    format!("/{ROOT_SEGMENT}/{}/", sanitize_for_url(province))
}

/// `/codigo-postal/<province>/<canton>/`
pub fn canton_url(province: &str, canton: &str) -> String {
    format!(
        "/{ROOT_SEGMENT}/{}/{}/",
        sanitize_for_url(province),
        sanitize_for_url(canton)
    )
}

/// `/codigo-postal/<province>/<canton>/<district>/`
pub fn district_url(province: &str, canton: &str, district: &str) -> String {
    format!(
        "/{ROOT_SEGMENT}/{}/{}/{}/",
        sanitize_for_url(province),
        sanitize_for_url(canton),
        sanitize_for_url(district)
    )
}

/// Decoded URL path of a generated page.
///
/// Invariants:
/// - Always starts with `/`
/// - Always ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    pub fn from_page(path: &str) -> Self {
        let trimmed = path.trim();
        let inner = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let inner = inner.strip_suffix('/').unwrap_or(inner);
        if inner.is_empty() {
            return Self(Arc::from("/"));
        }
        Self(Arc::from(format!("/{inner}/")))
    }

    /// Get the URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the URL path is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Whether any segment is empty (e.g. `/codigo-postal//`), meaning a name slugified to nothing.
    pub fn has_empty_segment(&self) -> bool {
        !self.is_root() && self.segments().any(str::is_empty)
    }

    /// Path segments without the surrounding slashes.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let inner = self.0.strip_prefix('/').unwrap_or(&self.0);
        let inner = inner.strip_suffix('/').unwrap_or(inner);
        (!inner.is_empty())
            .then(|| inner.split('/'))
            .into_iter()
            .flatten()
    }

    /// Get parent URL path.
    ///
    /// `/codigo-postal/limon/` -> `/codigo-postal/`, `/codigo-postal/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) | None => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(format!("{}/", &trimmed[..idx])))),
        }
    }

    /// Relative output file for this page: `codigo-postal/limon/index.html`.
    pub fn to_output_file(&self) -> std::path::PathBuf {
        let mut path: std::path::PathBuf = self.segments().collect();
        path.push("index.html");
        path
    }

    /// Absolute URL under `base` (`https://example.com` + `/limon/`).
    pub fn to_absolute(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.0)
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
