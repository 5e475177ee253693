//! Search index configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The dataset copied to the output as JSON for client-side search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchIndexConfig {
    /// Write the search index.
    pub enable: bool,
    /// Output path (relative to output dir).
    pub path: PathBuf,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "postal-codes.json".into(),
        }
    }
}

impl SearchIndexConfig {
    pub const PATH: FieldPath = FieldPath::new("build.search_index.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error(Self::PATH, "must be relative to the output directory");
        }
    }
}
