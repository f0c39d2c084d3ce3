//! JSON persistence for board parameters.
//!
//! A saved file carries every field needed to regenerate an identical board,
//! so the printed target and its parameter record travel together.

use std::fs;
use std::path::Path;

use crate::spec::BoardSpec;

#[derive(thiserror::Error, Debug)]
pub enum BoardIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BoardSpec {
    /// Load board parameters from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, BoardIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write board parameters to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), BoardIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board_0.json");

        let spec = BoardSpec {
            columns: 12,
            rows: 20,
            cell_size: 0.0125,
            marker_size: 0.01,
            dictionary: "DICT_4X4_250".to_string(),
            start_marker_id: 120,
            label: "4X4_250, 0.0125, 0.01".to_string(),
            border_bleed: 0.00635,
            border_margin: 0.01,
        };
        spec.write_json(&path).unwrap();

        let loaded = BoardSpec::load_json(&path).unwrap();
        assert_eq!(loaded, spec);
    }

    #[test]
    fn field_names_stay_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let spec = BoardSpec {
            columns: 4,
            rows: 4,
            cell_size: 0.05,
            marker_size: 0.03,
            dictionary: "DICT_6X6_250".to_string(),
            start_marker_id: 0,
            label: String::new(),
            border_bleed: 0.0,
            border_margin: 0.0,
        };
        spec.write_json(&path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        for field in [
            "\"columns\"",
            "\"rows\"",
            "\"cellSize\"",
            "\"markerSize\"",
            "\"dictionary\"",
            "\"startMarkerId\"",
            "\"borderBleed\"",
            "\"borderMargin\"",
        ] {
            assert!(raw.contains(field), "missing {field} in {raw}");
        }
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"{
            "columns": 4, "rows": 5,
            "cellSize": 0.05, "markerSize": 0.03,
            "dictionary": "DICT_4X4_50"
        }"#;
        let spec: BoardSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(spec.start_marker_id, 0);
        assert_eq!(spec.border_bleed, 0.0);
        assert!(spec.label.is_empty());
    }
}
