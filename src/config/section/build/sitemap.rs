//! Sitemap generation configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// `<changefreq>` values from the sitemap protocol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file (relative to output dir).
    pub path: PathBuf,
    /// Expected change frequency of every page.
    pub changefreq: ChangeFreq,
    /// Priority of every page, 0.0 to 1.0.
    pub priority: f32,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
            changefreq: ChangeFreq::Weekly,
            priority: 0.7,
        }
    }
}

impl SitemapConfig {
    pub const ENABLE: FieldPath = FieldPath::new("build.sitemap.enable");
    pub const PATH: FieldPath = FieldPath::new("build.sitemap.path");
    pub const PRIORITY: FieldPath = FieldPath::new("build.sitemap.priority");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.priority) {
            diag.error_with_hint(
                Self::PRIORITY,
                format!("priority {} is out of range", self.priority),
                "use a value between 0.0 and 1.0",
            );
        }
        if self.path.is_absolute() {
            diag.error(Self::PATH, "must be relative to the output directory");
        }
    }
}
