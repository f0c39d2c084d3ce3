//! Static registry of supported dictionary names.
//!
//! Two naming conventions are supported, matching the classic OpenCV set:
//! - `DICT_<N>X<N>_<count>` encodes `N` interior cells per side,
//! - `DICT_APRILTAG_<bits><hamming>` encodes a bit count whose square root is
//!   the interior side.
//!
//! Lookups fail closed: a name absent from the table is rejected, never
//! guessed at.

use crate::dictionary::DictionaryError;

/// Registry entry for one supported dictionary name.
#[derive(Clone, Copy, Debug)]
pub struct DictionaryInfo {
    /// Canonical dictionary name.
    pub name: &'static str,
    /// Interior marker cells per side (border ring excluded).
    pub interior_cells: usize,
    /// Number of marker ids the dictionary defines.
    pub capacity: usize,
}

/// All dictionary names this crate accepts.
pub const SUPPORTED: &[DictionaryInfo] = &[
    DictionaryInfo { name: "DICT_4X4_50", interior_cells: 4, capacity: 50 },
    DictionaryInfo { name: "DICT_4X4_100", interior_cells: 4, capacity: 100 },
    DictionaryInfo { name: "DICT_4X4_250", interior_cells: 4, capacity: 250 },
    DictionaryInfo { name: "DICT_4X4_1000", interior_cells: 4, capacity: 1000 },
    DictionaryInfo { name: "DICT_5X5_50", interior_cells: 5, capacity: 50 },
    DictionaryInfo { name: "DICT_5X5_100", interior_cells: 5, capacity: 100 },
    DictionaryInfo { name: "DICT_5X5_250", interior_cells: 5, capacity: 250 },
    DictionaryInfo { name: "DICT_5X5_1000", interior_cells: 5, capacity: 1000 },
    DictionaryInfo { name: "DICT_6X6_50", interior_cells: 6, capacity: 50 },
    DictionaryInfo { name: "DICT_6X6_100", interior_cells: 6, capacity: 100 },
    DictionaryInfo { name: "DICT_6X6_250", interior_cells: 6, capacity: 250 },
    DictionaryInfo { name: "DICT_6X6_1000", interior_cells: 6, capacity: 1000 },
    DictionaryInfo { name: "DICT_7X7_50", interior_cells: 7, capacity: 50 },
    DictionaryInfo { name: "DICT_7X7_100", interior_cells: 7, capacity: 100 },
    DictionaryInfo { name: "DICT_7X7_250", interior_cells: 7, capacity: 250 },
    DictionaryInfo { name: "DICT_7X7_1000", interior_cells: 7, capacity: 1000 },
    DictionaryInfo { name: "DICT_APRILTAG_16h5", interior_cells: 4, capacity: 30 },
    DictionaryInfo { name: "DICT_APRILTAG_25h9", interior_cells: 5, capacity: 35 },
    DictionaryInfo { name: "DICT_APRILTAG_36h10", interior_cells: 6, capacity: 2320 },
    DictionaryInfo { name: "DICT_APRILTAG_36h11", interior_cells: 6, capacity: 587 },
];

/// Look up a dictionary name in the registry.
pub fn lookup(name: &str) -> Result<&'static DictionaryInfo, DictionaryError> {
    SUPPORTED
        .iter()
        .find(|info| info.name == name)
        .ok_or_else(|| DictionaryError::UnsupportedDictionary(name.to_string()))
}

/// Marker side length in cells for a dictionary name.
///
/// With `include_border` the mandatory 1-cell dark border ring adds 2 cells.
/// This assumes single-cell borders, the convention all supported
/// dictionaries use.
pub fn marker_width_cells(name: &str, include_border: bool) -> Result<usize, DictionaryError> {
    let info = lookup(name)?;
    Ok(info.interior_cells + if include_border { 2 } else { 0 })
}

/// Number of marker ids defined by a dictionary name.
pub fn dictionary_size(name: &str) -> Result<usize, DictionaryError> {
    Ok(lookup(name)?.capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_names_encode_interior_cells() {
        assert_eq!(marker_width_cells("DICT_4X4_50", false).unwrap(), 4);
        assert_eq!(marker_width_cells("DICT_4X4_50", true).unwrap(), 6);
        assert_eq!(marker_width_cells("DICT_7X7_1000", true).unwrap(), 9);
    }

    #[test]
    fn apriltag_names_encode_bit_counts() {
        // 36 bits -> 6x6 interior.
        assert_eq!(marker_width_cells("DICT_APRILTAG_36h11", false).unwrap(), 6);
        assert_eq!(marker_width_cells("DICT_APRILTAG_16h5", true).unwrap(), 6);
    }

    #[test]
    fn capacities_match_the_name_suffix() {
        assert_eq!(dictionary_size("DICT_5X5_250").unwrap(), 250);
        assert_eq!(dictionary_size("DICT_APRILTAG_36h11").unwrap(), 587);
    }

    #[test]
    fn unknown_names_fail_closed() {
        for name in ["DICT_8X8_50", "DICT_ARUCO_ORIGINAL", "", "dict_4x4_50"] {
            assert!(matches!(
                lookup(name),
                Err(DictionaryError::UnsupportedDictionary(_))
            ));
        }
    }
}
