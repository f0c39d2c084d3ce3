//! Board composition.
//!
//! `generate` is a pure function of its inputs: validation first, then one
//! row-major pass emitting cell backgrounds, marker rectangles and labels,
//! then the board label and crop marks. Shapes are appended in that order and
//! never reordered, so later fills win wherever they overlap.

use charuco_print_aruco::MarkerSource;
use log::debug;

use crate::border::BorderLayout;
use crate::layout::{Cell, GridLayout};
use crate::marker::marker_shapes;
use crate::shapes::{BoardDrawing, CanvasGeometry, Color, TextAnchor, VectorShape};
use crate::spec::{BoardError, BoardKind, BoardSpec};
use crate::units::{Unit, UnitTransform};

/// Label text height in cell units.
pub const TEXT_SCALE: f64 = 0.1;

/// Crop-mark stroke width in meters (0.2 mm).
const CROP_STROKE_WIDTH: f64 = 0.0002;

/// Compose a board drawing in the default output unit (centimeters).
pub fn generate(
    spec: &BoardSpec,
    kind: BoardKind,
    source: &dyn MarkerSource,
) -> Result<BoardDrawing, BoardError> {
    generate_with_unit(spec, kind, Unit::Cm, source)
}

/// Compose a board drawing in an explicit output unit.
pub fn generate_with_unit(
    spec: &BoardSpec,
    kind: BoardKind,
    unit: Unit,
    source: &dyn MarkerSource,
) -> Result<BoardDrawing, BoardError> {
    spec.validate(kind)?;
    spec.check_capacity(kind, source.len())?;

    let layout = GridLayout::new(spec.columns, spec.rows, kind, spec.start_marker_id);
    let units = UnitTransform::new(unit);
    let border = BorderLayout::new(spec.border_bleed, spec.border_margin, spec.cell_size);

    let cell = spec.cell_size;
    let (w_cells, h_cells) = border.canvas_cells(spec.columns, spec.rows);
    let canvas = CanvasGeometry {
        width: units.to_units(w_cells * cell),
        height: units.to_units(h_cells * cell),
        origin_offset: units.to_units(border.offset() * cell),
        unit,
    };

    let marker_offset = (spec.cell_size - spec.marker_size) / 2.0;
    let mut shapes = Vec::new();

    for (row, col, assignment) in layout.cells() {
        let x0 = (col as f64 + border.offset()) * cell;
        let y0 = (row as f64 + border.offset()) * cell;

        // Full-cell background: dark for solid squares, light underneath
        // markers.
        let fill = match assignment {
            Cell::Solid { dark: true } => Color::Dark,
            Cell::Solid { dark: false } | Cell::Marker { .. } => Color::Light,
        };
        shapes.push(VectorShape::Rect {
            x: units.to_units(x0),
            y: units.to_units(y0),
            width: units.to_units(cell),
            height: units.to_units(cell),
            fill,
        });

        if let Cell::Marker { id } = assignment {
            let bitmap = source.bitmap(id)?;
            shapes.extend(marker_shapes(
                &bitmap,
                (x0 + marker_offset, y0 + marker_offset),
                spec.marker_size,
                &units,
            ));
            // Id label in the strip between the cell edge and the marker.
            shapes.push(VectorShape::Text {
                x: units.to_units(x0 + 0.5 * cell),
                y: units.to_units(y0 + TEXT_SCALE * cell),
                content: id.to_string(),
                font_size: units.to_units(TEXT_SCALE * cell),
                fill: Color::Dark,
                anchor: TextAnchor::Middle,
            });
        }
    }

    if !spec.label.is_empty() {
        shapes.push(board_label(spec, kind, &border, &units));
    }

    for line in border.crop_lines(spec.columns, spec.rows) {
        shapes.push(VectorShape::Line {
            x1: units.to_units(line.from.0 * cell),
            y1: units.to_units(line.from.1 * cell),
            x2: units.to_units(line.to.0 * cell),
            y2: units.to_units(line.to.1 * cell),
            stroke: Color::Dark,
            stroke_width: units.to_units(CROP_STROKE_WIDTH),
        });
    }

    debug!(
        "composed {kind:?} board: {}x{} cells, {} markers from id {}, {} shapes",
        spec.columns,
        spec.rows,
        layout.marker_count(),
        spec.start_marker_id,
        shapes.len()
    );

    Ok(BoardDrawing { canvas, shapes })
}

/// Board label placement.
///
/// ChArUco boards carry the label light-on-dark, centered over the first
/// solid square of the top row (column 0 when the top-left cell is dark,
/// column 1 otherwise). Grid boards have no dark squares; the label is
/// left-anchored in the bottom strip of the top-left cell so long labels run
/// across the board instead of overflowing one cell, in dark text, clear of
/// the id label at the top.
fn board_label(
    spec: &BoardSpec,
    kind: BoardKind,
    border: &BorderLayout,
    units: &UnitTransform,
) -> VectorShape {
    let cell = spec.cell_size;
    let (x_cells, y_cells, fill, anchor) = match kind {
        BoardKind::Charuco => {
            let dark_col = if spec.rows % 2 == 0 { 0.0 } else { 1.0 };
            (
                dark_col + 0.5,
                0.5 + TEXT_SCALE / 2.0,
                Color::Light,
                TextAnchor::Middle,
            )
        }
        BoardKind::GridBoard => (
            TEXT_SCALE / 2.0,
            1.0 - TEXT_SCALE / 2.0,
            Color::Dark,
            TextAnchor::Start,
        ),
    };
    VectorShape::Text {
        x: units.to_units((border.offset() + x_cells) * cell),
        y: units.to_units((border.offset() + y_cells) * cell),
        content: spec.label.clone(),
        font_size: units.to_units(TEXT_SCALE * cell),
        fill,
        anchor,
    }
}
