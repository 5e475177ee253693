//! Dataset loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("dataset is not a valid postal code list")]
    Json(#[from] serde_json::Error),

    #[error("record {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_data_error_display() {
        let io_err = DataError::Io(
            PathBuf::from("postal-codes.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("postal-codes.json"));

        let empty = DataError::EmptyField {
            index: 3,
            field: "canton",
        };
        assert_eq!(format!("{empty}"), "record 3 has an empty `canton`");
    }
}
