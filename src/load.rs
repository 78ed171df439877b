use serde::de::DeserializeOwned;
use thiserror::Error;

use std::{fs, io, path::Path};

/// Why an input file could not be loaded. All variants are terminal for the
/// run: the caller reports the message and produces no report.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: file {0} not found")]
    NotFound(String),
    #[error("Error: file {0} does not contain valid JSON: {1}")]
    Parse(String, serde_json::Error),
    #[error("Error: reading {0}: {1}")]
    Io(String, io::Error),
}

/// Reads the JSON file at `path` and deserializes it into a `T`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the path doesn't resolve to a file,
/// [`LoadError::Parse`] if the content isn't valid JSON (or doesn't have the
/// shape `T` expects), and [`LoadError::Io`] for any other read failure.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
        _ => LoadError::Io(path.display().to_string(), e),
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::Parse(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::catalogue::PriceEntry;

    use super::*;

    #[test]
    fn load_json_fn_decodes_a_price_catalogue() {
        let catalogue: Vec<PriceEntry> = load_json("testdata/prices.json").unwrap();
        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue[0].title, "Apple");
    }

    #[test]
    fn load_json_fn_decodes_a_sales_record() {
        let sales: Vec<Value> = load_json("testdata/sales.json").unwrap();
        assert_eq!(sales.len(), 6);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = load_json::<Vec<Value>>("testdata/no_such_file.json").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)), "got {err:?}");
        assert!(err.to_string().contains("no_such_file.json"));
    }

    #[test]
    fn malformed_content_is_reported_as_parse_error() {
        let err = load_json::<Vec<Value>>("testdata/malformed.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(..)), "got {err:?}");
    }

    #[test]
    fn wrong_shape_is_reported_as_parse_error() {
        // valid JSON, but not a catalogue
        let err = load_json::<Vec<PriceEntry>>("testdata/sales.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(..)), "got {err:?}");
    }
}
