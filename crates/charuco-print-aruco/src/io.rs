//! JSON code-table loading.
//!
//! Dictionaries are data. The source-of-truth for each one is a small JSON
//! file holding the packed codes, e.g.:
//!
//! ```json
//! { "name": "DICT_4X4_50", "codes": [23, 4242, 1099] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, DictionaryError};

/// Errors from reading or validating a code-table file.
#[derive(thiserror::Error, Debug)]
pub enum CodeTableError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("code {index} has bits outside the {bits}-bit marker area")]
    InvalidCode { index: usize, bits: usize },
}

/// On-disk representation of one dictionary's codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeTable {
    pub name: String,
    pub codes: Vec<u64>,
}

impl CodeTable {
    /// Load a code table from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CodeTableError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this code table to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CodeTableError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate against the registry and build a dictionary.
    pub fn into_dictionary(self) -> Result<Dictionary, CodeTableError> {
        let dict = Dictionary::new(&self.name, self.codes)?;
        let bits = dict.bit_count();
        if bits < 64 {
            if let Some(index) = dict.codes().iter().position(|&c| c >> bits != 0) {
                return Err(CodeTableError::InvalidCode { index, bits });
            }
        }
        Ok(dict)
    }
}

/// Load a dictionary straight from a `*_CODES.json` file.
pub fn load_dictionary_json(path: impl AsRef<Path>) -> Result<Dictionary, CodeTableError> {
    CodeTable::load_json(path)?.into_dictionary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkerSource;

    #[test]
    fn round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DICT_4X4_50_CODES.json");

        let table = CodeTable {
            name: "DICT_4X4_50".to_string(),
            codes: vec![0x1234, 0xffff, 0],
        };
        table.write_json(&path).unwrap();

        let dict = load_dictionary_json(&path).unwrap();
        assert_eq!(dict.name(), "DICT_4X4_50");
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.codes(), &[0x1234, 0xffff, 0]);
    }

    #[test]
    fn rejects_codes_wider_than_the_marker() {
        let table = CodeTable {
            name: "DICT_4X4_50".to_string(),
            codes: vec![0, 1u64 << 16],
        };
        assert!(matches!(
            table.into_dictionary(),
            Err(CodeTableError::InvalidCode { index: 1, bits: 16 })
        ));
    }

    #[test]
    fn rejects_unknown_dictionary_names() {
        let table = CodeTable {
            name: "DICT_3X3_50".to_string(),
            codes: vec![0],
        };
        assert!(matches!(
            table.into_dictionary(),
            Err(CodeTableError::Dictionary(
                DictionaryError::UnsupportedDictionary(_)
            ))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_dictionary_json("/nonexistent/DICT_4X4_50_CODES.json").unwrap_err();
        assert!(matches!(err, CodeTableError::Io(_)));
    }
}
