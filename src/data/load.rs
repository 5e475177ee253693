//! Dataset loading.
//!
//! The dataset ships inside the binary; a JSON file with the same shape can
//! replace it through `[build] data` or `--data`.
//!
//! The embedded `data/postal-codes.json` is a sample (52 districts in 15
//! cantons across all 7 provinces), not the full national list. Point
//! `--data` at a complete export for production builds.

use super::{DataError, PostalCodeEntry, PostalCodes};
use std::{fs, path::Path};

/// Dataset bundled at compile time.
const EMBEDDED: &str = include_str!("../../data/postal-codes.json");

impl PostalCodes {
    /// Parse a JSON array of records and check the non-empty invariant.
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let entries: Vec<PostalCodeEntry> = serde_json::from_str(content)?;
        check_non_empty(&entries)?;
        Ok(Self::from(entries))
    }

    /// Load a dataset file.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let content =
            fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED)
    }

    /// Load from `path` when given, otherwise the embedded dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, DataError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Serialize back to the JSON shape it was loaded from.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self.entries())
        } else {
            serde_json::to_string(self.entries())
        }
    }
}

fn check_non_empty(entries: &[PostalCodeEntry]) -> Result<(), DataError> {
    for (index, entry) in entries.iter().enumerate() {
        if let Some((field, _)) = entry.fields().into_iter().find(|(_, v)| v.is_empty()) {
            return Err(DataError::EmptyField { index, field });
        }
    }
    Ok(())
}
