//! Board parameters and validation.

use charuco_print_aruco::{registry, DictionaryError};
use serde::{Deserialize, Serialize};

use crate::layout;

/// Board flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    /// Checkerboard with markers on the light squares.
    Charuco,
    /// A marker in every cell, no checkerboard squares.
    GridBoard,
}

/// Full parameter set for one board.
///
/// Lengths are meters. The serialized field names (`cellSize`, `markerSize`,
/// `startMarkerId`, ...) are kept stable so a saved file regenerates an
/// identical board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSpec {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f64,
    pub marker_size: f64,
    pub dictionary: String,
    #[serde(default)]
    pub start_marker_id: u32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub border_bleed: f64,
    #[serde(default)]
    pub border_margin: f64,
}

/// Board validation and composition errors.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("marker side {marker_size} m will not fit in a cell of side {cell_size} m")]
    InvalidDimensions { cell_size: f64, marker_size: f64 },
    #[error("{columns}x{rows} cells cannot host a board (at least {min} required)")]
    InvalidGrid { columns: u32, rows: u32, min: u32 },
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(
        "dictionary {dictionary} has {available} markers, \
         board needs {needed} starting at id {start_marker_id}"
    )]
    InsufficientMarkers {
        dictionary: String,
        needed: usize,
        available: usize,
        start_marker_id: u32,
    },
}

impl BoardSpec {
    /// Validate the spec for the given board kind.
    ///
    /// Fail-fast: called before any shape is emitted, so a failure never
    /// yields a partially built drawing.
    pub fn validate(&self, kind: BoardKind) -> Result<(), BoardError> {
        let lengths_ok = self.cell_size.is_finite()
            && self.cell_size > 0.0
            && self.marker_size.is_finite()
            && self.marker_size > 0.0;
        if !lengths_ok || self.marker_size >= self.cell_size {
            return Err(BoardError::InvalidDimensions {
                cell_size: self.cell_size,
                marker_size: self.marker_size,
            });
        }

        // ChArUco needs at least one marker cell next to a solid one.
        let min = match kind {
            BoardKind::Charuco => 2,
            BoardKind::GridBoard => 1,
        };
        let cells = u64::from(self.columns) * u64::from(self.rows);
        if self.columns == 0 || self.rows == 0 || cells < u64::from(min) {
            return Err(BoardError::InvalidGrid {
                columns: self.columns,
                rows: self.rows,
                min,
            });
        }

        registry::lookup(&self.dictionary)?;
        Ok(())
    }

    /// Number of markers this board consumes.
    pub fn required_markers(&self, kind: BoardKind) -> usize {
        layout::required_markers(self.columns, self.rows, kind)
    }

    /// Check the dictionary holds enough markers from `start_marker_id` on.
    ///
    /// The boundary case `start + needed == available` succeeds.
    pub fn check_capacity(&self, kind: BoardKind, available: usize) -> Result<(), BoardError> {
        let needed = self.required_markers(kind);
        if self.start_marker_id as u64 + needed as u64 > available as u64 {
            return Err(BoardError::InsufficientMarkers {
                dictionary: self.dictionary.clone(),
                needed,
                available,
                start_marker_id: self.start_marker_id,
            });
        }
        Ok(())
    }

    /// Default human-readable board label: dictionary (sans `DICT_` prefix),
    /// cell side and marker side.
    pub fn default_label(&self) -> String {
        let dict = self
            .dictionary
            .strip_prefix("DICT_")
            .unwrap_or(&self.dictionary);
        format!("{dict}, {}, {}", self.cell_size, self.marker_size)
    }

    /// Derive `count` independent specs with consecutive marker id ranges.
    ///
    /// Board `i` starts at `start_marker_id + i * required_markers`; batches
    /// never share marker ids and may be generated in parallel.
    pub fn batch(&self, kind: BoardKind, count: u32) -> Vec<BoardSpec> {
        let per_board = self.required_markers(kind) as u32;
        (0..count)
            .map(|i| {
                let mut spec = self.clone();
                spec.start_marker_id = self.start_marker_id + i * per_board;
                spec
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_spec() -> BoardSpec {
        BoardSpec {
            columns: 4,
            rows: 4,
            cell_size: 0.05,
            marker_size: 0.03,
            dictionary: "DICT_4X4_50".to_string(),
            start_marker_id: 0,
            label: String::new(),
            border_bleed: 0.0,
            border_margin: 0.0,
        }
    }

    #[test]
    fn valid_spec_passes() {
        base_spec().validate(BoardKind::Charuco).unwrap();
        base_spec().validate(BoardKind::GridBoard).unwrap();
    }

    #[test]
    fn marker_must_be_smaller_than_cell() {
        let mut spec = base_spec();
        spec.marker_size = spec.cell_size;
        assert!(matches!(
            spec.validate(BoardKind::Charuco),
            Err(BoardError::InvalidDimensions { .. })
        ));

        // Strictly smaller is enough.
        spec.marker_size = spec.cell_size - 1e-6;
        spec.validate(BoardKind::Charuco).unwrap();
    }

    #[test]
    fn nonpositive_lengths_are_invalid() {
        let mut spec = base_spec();
        spec.cell_size = 0.0;
        assert!(matches!(
            spec.validate(BoardKind::Charuco),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn single_cell_charuco_is_rejected() {
        let mut spec = base_spec();
        spec.columns = 1;
        spec.rows = 1;
        assert!(matches!(
            spec.validate(BoardKind::Charuco),
            Err(BoardError::InvalidGrid { min: 2, .. })
        ));
        // A single-cell grid board is fine.
        spec.validate(BoardKind::GridBoard).unwrap();
    }

    #[test]
    fn huge_grids_do_not_overflow_the_cell_count() {
        // 70_000^2 cells exceed u32::MAX; the count is taken in u64.
        let mut spec = base_spec();
        spec.columns = 70_000;
        spec.rows = 70_000;
        spec.validate(BoardKind::Charuco).unwrap();
    }

    #[test]
    fn unknown_dictionary_fails_validation() {
        let mut spec = base_spec();
        spec.dictionary = "DICT_2X2_50".to_string();
        assert!(matches!(
            spec.validate(BoardKind::Charuco),
            Err(BoardError::Dictionary(
                DictionaryError::UnsupportedDictionary(_)
            ))
        ));
    }

    #[test]
    fn capacity_boundary_succeeds() {
        let mut spec = base_spec();
        spec.start_marker_id = 2;
        // 4x4 ChArUco needs 8 markers; ids 2..10 fit exactly in 10.
        spec.check_capacity(BoardKind::Charuco, 10).unwrap();
        let err = spec.check_capacity(BoardKind::Charuco, 9).unwrap_err();
        match err {
            BoardError::InsufficientMarkers {
                needed, available, ..
            } => {
                assert_eq!(needed, 8);
                assert_eq!(available, 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_label_strips_the_dict_prefix() {
        assert_eq!(base_spec().default_label(), "4X4_50, 0.05, 0.03");
    }

    #[test]
    fn batches_get_disjoint_id_ranges() {
        let specs = base_spec().batch(BoardKind::Charuco, 3);
        let starts: Vec<u32> = specs.iter().map(|s| s.start_marker_id).collect();
        assert_eq!(starts, vec![0, 8, 16]);
    }
}
