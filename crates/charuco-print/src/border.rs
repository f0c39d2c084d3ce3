//! Print bleed, margin and crop-mark geometry.
//!
//! The board material is trimmed at the bleed/margin interface. Everything
//! here works in cell-length units; callers scale by the cell size once.

/// Crop-mark length in cell units.
pub const CROP_LINE_LENGTH: f64 = 0.25;

/// One crop-mark segment in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Bleed and margin widths around the active grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderLayout {
    bleed: f64,
    margin: f64,
}

impl BorderLayout {
    /// Convert bleed and margin from meters to cell units.
    pub fn new(border_bleed: f64, border_margin: f64, cell_size: f64) -> Self {
        Self {
            bleed: border_bleed / cell_size,
            margin: border_margin / cell_size,
        }
    }

    #[inline]
    pub fn bleed(&self) -> f64 {
        self.bleed
    }

    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Grid translation in cell units; the canvas grows by twice this amount
    /// in each axis.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.bleed + self.margin
    }

    /// Canvas size in cell units for a `columns x rows` grid.
    pub fn canvas_cells(&self, columns: u32, rows: u32) -> (f64, f64) {
        (
            columns as f64 + 2.0 * self.offset(),
            rows as f64 + 2.0 * self.offset(),
        )
    }

    /// Eight crop-mark segments, one horizontal and one vertical per corner.
    ///
    /// Each segment starts at the trim-line corner (the bleed/margin
    /// boundary) and extends outward, away from the board center, by
    /// [`CROP_LINE_LENGTH`]. Empty when there is no border at all.
    pub fn crop_lines(&self, columns: u32, rows: u32) -> Vec<CropLine> {
        if self.offset() <= 0.0 {
            return Vec::new();
        }

        let near = self.bleed;
        let far_x = columns as f64 + self.offset() + self.margin;
        let far_y = rows as f64 + self.offset() + self.margin;

        // Trim corner and its outward direction per axis.
        let corners = [
            ((near, near), (-1.0, -1.0)),
            ((far_x, near), (1.0, -1.0)),
            ((near, far_y), (-1.0, 1.0)),
            ((far_x, far_y), (1.0, 1.0)),
        ];

        let mut lines = Vec::with_capacity(8);
        for ((cx, cy), (dx, dy)) in corners {
            lines.push(CropLine {
                from: (cx, cy),
                to: (cx + dx * CROP_LINE_LENGTH, cy),
            });
            lines.push(CropLine {
                from: (cx, cy),
                to: (cx, cy + dy * CROP_LINE_LENGTH),
            });
        }
        lines
    }
}
