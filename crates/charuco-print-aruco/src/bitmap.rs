//! Rendered marker bitmaps.

/// A square dark/light cell grid for one marker, border ring included.
///
/// The bitmap is immutable once built: it is rendered once per marker id and
/// read by the vector converter afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerBitmap {
    width: usize,
    dark: Vec<bool>,
}

impl MarkerBitmap {
    /// Build a bitmap from row-major cells (`true` = dark).
    ///
    /// # Panics
    ///
    /// Panics if `dark.len() != width * width`.
    pub fn new(width: usize, dark: Vec<bool>) -> Self {
        assert_eq!(
            dark.len(),
            width * width,
            "bitmap cell count does not match width {width}"
        );
        Self { width, dark }
    }

    /// Side length in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(x, y)` is dark.
    #[inline]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.dark[y * self.width + x]
    }

    /// Whether the cell at `(x, y)` is light.
    #[inline]
    pub fn is_light(&self, x: usize, y: usize) -> bool {
        !self.is_dark(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let bm = MarkerBitmap::new(2, vec![true, false, false, true]);
        assert!(bm.is_dark(0, 0));
        assert!(bm.is_light(1, 0));
        assert!(bm.is_light(0, 1));
        assert!(bm.is_dark(1, 1));
    }

    #[test]
    #[should_panic]
    fn wrong_cell_count_panics() {
        let _ = MarkerBitmap::new(3, vec![true; 8]);
    }
}
