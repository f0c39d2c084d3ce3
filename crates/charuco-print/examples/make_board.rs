//! Generate a printable board from a dictionary code table.
//!
//! Usage:
//!
//! ```text
//! cargo run --example make_board -- DICT_4X4_50_CODES.json out/board.svg
//! ```
//!
//! Writes the SVG next to a `*.json` parameter record that regenerates the
//! same board.

use charuco_print::{generate, write_svg, BoardKind, BoardSpec};
use charuco_print_aruco::load_dictionary_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let codes_path = args
        .next()
        .ok_or("usage: make_board <CODES.json> [out.svg]")?;
    let svg_path = args.next().unwrap_or_else(|| "board.svg".to_string());

    let dict = load_dictionary_json(&codes_path)?;

    let mut spec = BoardSpec {
        columns: 4,
        rows: 4,
        cell_size: 0.05,
        marker_size: 0.03,
        dictionary: dict.name().to_string(),
        start_marker_id: 0,
        label: String::new(),
        border_bleed: 0.00635,
        border_margin: 0.01,
    };
    spec.label = spec.default_label();

    let drawing = generate(&spec, BoardKind::Charuco, &dict)?;
    write_svg(&drawing, &svg_path)?;

    let json_path = std::path::Path::new(&svg_path).with_extension("json");
    spec.write_json(&json_path)?;
    println!("wrote {svg_path} and {}", json_path.display());
    Ok(())
}
