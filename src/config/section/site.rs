//! `[site]` configuration.
//!
//! Site metadata used in page `<head>`, canonical links and the sitemap.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title, shown on the home page and as `<title>` suffix.
    pub title: String,

    /// Site description (home page meta description).
    pub description: String,

    /// Public site URL (e.g., "https://seo-postal-code.vercel.app").
    pub url: Option<String>,

    /// Language code for `<html lang>`.
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Códigos Postales de Costa Rica".into(),
            description: "Encuentra el código postal de cualquier provincia, cantón y distrito de Costa Rica."
                .into(),
            url: Some("https://seo-postal-code.vercel.app".into()),
            language: "es".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.description");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `sitemap_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "title must not be empty");
        }
        if self.description.trim().is_empty() {
            diag.warn(Self::DESCRIPTION, "empty, home page has no meta description");
        }

        // Sitemap requires absolute locations
        if sitemap_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "{} is enabled but {} is not configured",
                    crate::config::SitemapConfig::ENABLE,
                    Self::URL
                ),
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
