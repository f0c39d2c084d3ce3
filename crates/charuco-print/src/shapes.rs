//! Abstract vector shapes and canvas geometry.
//!
//! The composer emits an ordered shape list; consumers must render shapes in
//! sequence so that the last writer wins wherever fills overlap. Coordinates
//! and lengths are already in drawing units (see [`crate::Unit`]).

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Board fill colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Dark,
    Light,
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
}

/// One drawing primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        fill: Color,
        anchor: TextAnchor,
    },
}

/// Output canvas dimensions, border expansion included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    /// Canvas width in drawing units.
    pub width: f64,
    /// Canvas height in drawing units.
    pub height: f64,
    /// Translation applied to the active grid in both axes, in drawing units.
    pub origin_offset: f64,
    /// Drawing unit tag.
    pub unit: Unit,
}

/// One complete composed board.
#[derive(Clone, Debug)]
pub struct BoardDrawing {
    pub canvas: CanvasGeometry,
    /// Ordered shape list; append-only, never reordered.
    pub shapes: Vec<VectorShape>,
}
