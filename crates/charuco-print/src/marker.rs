//! Marker bitmap to seamless vector rectangles.
//!
//! A naive one-rectangle-per-light-cell conversion leaves hairline gaps under
//! anti-aliased PDF rasterization wherever two rectangles only share an edge.
//! Instead, contiguous light cells are merged into maximal horizontal runs
//! and, independently, maximal vertical runs; both sets are emitted and
//! overlap at junctions. The fill is uniform, so the redundancy is invisible
//! while every seam disappears.

use charuco_print_aruco::MarkerBitmap;

use crate::shapes::{Color, VectorShape};
use crate::units::UnitTransform;

/// Axis-aligned rectangle in bitmap cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Maximal horizontal and vertical runs of light cells.
pub fn light_runs(bitmap: &MarkerBitmap) -> Vec<CellRect> {
    let n = bitmap.width();
    let mut rects = Vec::new();

    for y in 0..n {
        let mut x = 0;
        while x < n {
            if bitmap.is_light(x, y) {
                let start = x;
                while x < n && bitmap.is_light(x, y) {
                    x += 1;
                }
                rects.push(CellRect {
                    x: start,
                    y,
                    width: x - start,
                    height: 1,
                });
            } else {
                x += 1;
            }
        }
    }

    for x in 0..n {
        let mut y = 0;
        while y < n {
            if bitmap.is_light(x, y) {
                let start = y;
                while y < n && bitmap.is_light(x, y) {
                    y += 1;
                }
                rects.push(CellRect {
                    x,
                    y: start,
                    width: 1,
                    height: y - start,
                });
            } else {
                y += 1;
            }
        }
    }

    rects
}

/// Vector shapes for one marker of physical side `marker_length` (meters)
/// placed with its top-left corner at `origin` (meters).
///
/// The first shape is a full-size dark rectangle: it paints the border ring
/// and backs any anti-aliasing gaps between the light runs on top of it.
pub fn marker_shapes(
    bitmap: &MarkerBitmap,
    origin: (f64, f64),
    marker_length: f64,
    units: &UnitTransform,
) -> Vec<VectorShape> {
    let n = bitmap.width();
    let pixel = marker_length / n as f64;

    let mut shapes = vec![VectorShape::Rect {
        x: units.to_units(origin.0),
        y: units.to_units(origin.1),
        width: units.to_units(marker_length),
        height: units.to_units(marker_length),
        fill: Color::Dark,
    }];

    for run in light_runs(bitmap) {
        shapes.push(VectorShape::Rect {
            x: units.to_units(origin.0 + run.x as f64 * pixel),
            y: units.to_units(origin.1 + run.y as f64 * pixel),
            width: units.to_units(run.width as f64 * pixel),
            height: units.to_units(run.height as f64 * pixel),
            fill: Color::Light,
        });
    }

    shapes
}
