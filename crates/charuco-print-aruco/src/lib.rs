//! ArUco/AprilTag marker dictionaries for printable board generation.
//!
//! This crate covers the dictionary side of board printing:
//! - a static registry of supported dictionary names (grid size and nominal
//!   capacity derived from the name, failing closed on unknown names),
//! - rendering a marker id into its cell bitmap, including the mandatory
//!   dark border ring,
//! - loading dictionary code tables from JSON.
//!
//! It does **not** generate marker bit patterns. Code tables are data: either
//! embedded by the caller or loaded from `*_CODES.json` files.

mod bitmap;
mod dictionary;
mod io;
pub mod registry;

pub use bitmap::MarkerBitmap;
pub use dictionary::{Dictionary, DictionaryError, MarkerSource};
pub use io::{load_dictionary_json, CodeTable, CodeTableError};
pub use registry::{dictionary_size, marker_width_cells, DictionaryInfo};
