//! SVG serialization of board drawings.
//!
//! One concrete vector boundary: the abstract shape list becomes an SVG
//! document with unit-suffixed coordinates. `shape-rendering="crispEdges"`
//! disables anti-aliasing on rectangle and line edges so downstream
//! rasterizers keep the fills seam-free.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::shapes::{BoardDrawing, Color, TextAnchor, VectorShape};

const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Vector output errors.
#[derive(thiserror::Error, Debug)]
pub enum SvgError {
    #[error("output location unavailable: {path}")]
    OutputLocationUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn fill_name(color: Color) -> &'static str {
    match color {
        Color::Dark => "black",
        Color::Light => "white",
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a drawing as a complete SVG document.
pub fn svg_document(drawing: &BoardDrawing) -> String {
    let u = drawing.canvas.unit.suffix();
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    let _ = writeln!(
        s,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{:.4}{u}\" height=\"{:.4}{u}\">",
        drawing.canvas.width, drawing.canvas.height
    );

    for shape in &drawing.shapes {
        match shape {
            VectorShape::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                let _ = writeln!(
                    s,
                    "<rect x=\"{x:.4}{u}\" y=\"{y:.4}{u}\" width=\"{width:.4}{u}\" \
                     height=\"{height:.4}{u}\" fill=\"{}\" \
                     shape-rendering=\"crispEdges\"/>",
                    fill_name(*fill)
                );
            }
            VectorShape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                let _ = writeln!(
                    s,
                    "<line x1=\"{x1:.4}{u}\" y1=\"{y1:.4}{u}\" x2=\"{x2:.4}{u}\" \
                     y2=\"{y2:.4}{u}\" stroke=\"{}\" stroke-width=\"{stroke_width:.4}{u}\" \
                     fill=\"none\" shape-rendering=\"crispEdges\"/>",
                    fill_name(*stroke)
                );
            }
            VectorShape::Text {
                x,
                y,
                content,
                font_size,
                fill,
                anchor,
            } => {
                let _ = writeln!(
                    s,
                    "<text x=\"{x:.4}{u}\" y=\"{y:.4}{u}\" fill=\"{}\" \
                     text-anchor=\"{}\" font-size=\"{font_size:.4}{u}\" \
                     font-family=\"{FONT_FAMILY}\">{}</text>",
                    fill_name(*fill),
                    anchor_name(*anchor),
                    escape(content)
                );
            }
        }
    }

    s.push_str("</svg>\n");
    s
}

/// Write the drawing as an SVG file.
pub fn write_svg(drawing: &BoardDrawing, path: impl AsRef<Path>) -> Result<(), SvgError> {
    let path = path.as_ref();
    fs::write(path, svg_document(drawing)).map_err(|source| {
        SvgError::OutputLocationUnavailable {
            path: path.display().to_string(),
            source,
        }
    })?;
    info!("wrote board svg to {}", path.display());
    Ok(())
}
