//! Printable ChArUco and ArUco grid calibration boards as vector drawings.
//!
//! The crate composes a board from its parameters into an ordered list of
//! abstract shapes plus canvas geometry, then serializes that to SVG. The
//! pipeline is a pure single pass:
//!
//! parameters → grid layout → per-marker bitmap → seamless vector
//! rectangles → composed drawing → SVG.
//!
//! Marker bit patterns come from [`charuco_print_aruco`]; rasterization of
//! the SVG to PNG/PDF is left to external tools.
//!
//! ```no_run
//! use charuco_print::{generate, write_svg, BoardKind, BoardSpec};
//! use charuco_print_aruco::load_dictionary_json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dict = load_dictionary_json("DICT_4X4_50_CODES.json")?;
//! let spec = BoardSpec {
//!     columns: 4,
//!     rows: 4,
//!     cell_size: 0.05,
//!     marker_size: 0.03,
//!     dictionary: "DICT_4X4_50".to_string(),
//!     start_marker_id: 0,
//!     label: String::new(),
//!     border_bleed: 0.0,
//!     border_margin: 0.0,
//! };
//! let drawing = generate(&spec, BoardKind::Charuco, &dict)?;
//! write_svg(&drawing, "board.svg")?;
//! # Ok(())
//! # }
//! ```

mod border;
mod compose;
mod io;
mod layout;
mod marker;
mod shapes;
mod spec;
mod svg;
mod units;

pub use border::{BorderLayout, CropLine, CROP_LINE_LENGTH};
pub use compose::{generate, generate_with_unit, TEXT_SCALE};
pub use io::BoardIoError;
pub use layout::{required_markers, Cell, GridLayout};
pub use marker::{light_runs, marker_shapes, CellRect};
pub use shapes::{BoardDrawing, CanvasGeometry, Color, TextAnchor, VectorShape};
pub use spec::{BoardError, BoardKind, BoardSpec};
pub use svg::{svg_document, write_svg, SvgError};
pub use units::{Unit, UnitTransform};
