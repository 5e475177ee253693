//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! data = "data/postal-codes.json"  # Dataset (relative to site root); embedded if unset
//! output = "dist"                  # Output directory (relative to site root)
//! minify = true                    # Minify HTML and XML output
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! changefreq = "weekly"
//! priority = 0.7
//!
//! [build.search_index]
//! enable = true
//! path = "postal-codes.json"
//! ```

mod search;
mod sitemap;

pub use search::SearchIndexConfig;
pub use sitemap::SitemapConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Postal code dataset; `None` uses the one embedded in the binary.
    pub data: Option<PathBuf>,

    /// Build output directory.
    pub output: PathBuf,

    /// Minify generated HTML and XML.
    pub minify: bool,

    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Sitemap settings.
    pub sitemap: SitemapConfig,

    /// Search index settings.
    pub search_index: SearchIndexConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            data: None,
            output: "dist".into(),
            minify: true,
            clean: false,
            sitemap: SitemapConfig::default(),
            search_index: SearchIndexConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const DATA: FieldPath = FieldPath::new("build.data");

    /// Validate after paths are resolved against the site root.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(data) = &self.data
            && !data.is_file()
        {
            diag.error_with_hint(
                Self::DATA,
                format!("dataset `{}` not found", data.display()),
                "remove `build.data` to use the embedded dataset",
            );
        }
        self.sitemap.validate(diag);
        self.search_index.validate(diag);
    }
}
