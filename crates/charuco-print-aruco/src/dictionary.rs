//! Dictionary values and marker bitmap rendering.

use std::borrow::Cow;

use crate::bitmap::MarkerBitmap;
use crate::registry;

/// Errors from dictionary lookups and marker rendering.
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error("unsupported dictionary name: {0}")]
    UnsupportedDictionary(String),
    #[error("marker id {id} out of range for {name} ({available} markers)")]
    MarkerIdOutOfRange {
        name: &'static str,
        id: u32,
        available: usize,
    },
}

/// A fixed ArUco/AprilTag-style dictionary.
///
/// One `u64` per marker id encodes the inner `marker_size × marker_size`
/// cells in row-major order with **dark = 1**. The surrounding border ring is
/// implicit and always dark.
#[derive(Clone, Debug)]
pub struct Dictionary {
    name: &'static str,
    marker_size: usize,
    codes: Cow<'static, [u64]>,
}

impl Dictionary {
    /// Build a dictionary from a registered name and its code table.
    ///
    /// The marker side length comes from the registry; the name must be one
    /// of the supported set.
    pub fn new(
        name: &str,
        codes: impl Into<Cow<'static, [u64]>>,
    ) -> Result<Self, DictionaryError> {
        let info = registry::lookup(name)?;
        Ok(Self {
            name: info.name,
            marker_size: info.interior_cells,
            codes: codes.into(),
        })
    }

    /// Canonical dictionary name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Marker side length (inner cells per side).
    #[inline]
    pub fn marker_size(&self) -> usize {
        self.marker_size
    }

    /// Total number of inner cells per marker.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.marker_size * self.marker_size
    }

    /// Packed marker codes.
    #[inline]
    pub fn codes(&self) -> &[u64] {
        &self.codes
    }
}

/// Source of marker bitmaps for board composition.
///
/// The board composer depends only on these three queries and never inspects
/// the bit encoding behind them.
pub trait MarkerSource {
    /// Dictionary name backing this source.
    fn name(&self) -> &str;

    /// Marker side length in cells, optionally including the border ring.
    fn marker_width_cells(&self, include_border: bool) -> usize;

    /// Number of marker ids available.
    fn len(&self) -> usize;

    /// Whether the source defines no markers at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the bitmap for one marker id, border ring included.
    fn bitmap(&self, id: u32) -> Result<MarkerBitmap, DictionaryError>;
}

impl MarkerSource for Dictionary {
    fn name(&self) -> &str {
        self.name
    }

    fn marker_width_cells(&self, include_border: bool) -> usize {
        self.marker_size + if include_border { 2 } else { 0 }
    }

    fn len(&self) -> usize {
        self.codes.len()
    }

    fn bitmap(&self, id: u32) -> Result<MarkerBitmap, DictionaryError> {
        let code = *self.codes.get(id as usize).ok_or(
            DictionaryError::MarkerIdOutOfRange {
                name: self.name,
                id,
                available: self.codes.len(),
            },
        )?;

        let n = self.marker_size;
        let side = n + 2;
        let mut dark = vec![true; side * side];
        for y in 0..n {
            for x in 0..n {
                let bit = (code >> (y * n + x)) & 1;
                dark[(y + 1) * side + (x + 1)] = bit == 1;
            }
        }
        Ok(MarkerBitmap::new(side, dark))
    }
}
