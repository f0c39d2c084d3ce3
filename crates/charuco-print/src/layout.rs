//! Grid cell assignment for ChArUco and marker grid boards.

use crate::spec::BoardKind;

/// Kind and content of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Solid { dark: bool },
    Marker { id: u32 },
}

/// Number of markers a `columns x rows` board of the given kind consumes.
pub fn required_markers(columns: u32, rows: u32, kind: BoardKind) -> usize {
    let cells = columns as usize * rows as usize;
    match kind {
        BoardKind::Charuco => cells.div_ceil(2),
        BoardKind::GridBoard => cells,
    }
}

/// Cell assignments for one board, marker ids allocated in row-major order.
///
/// ChArUco placement convention: the top-left cell is Solid-dark when the row
/// count is even and a Marker cell when it is odd. This matches the board ids
/// of previously printed targets and must not change.
#[derive(Clone, Debug)]
pub struct GridLayout {
    columns: u32,
    cells: Vec<Cell>,
    marker_count: usize,
}

impl GridLayout {
    pub fn new(columns: u32, rows: u32, kind: BoardKind, start_marker_id: u32) -> Self {
        let mut cells = Vec::with_capacity(columns as usize * rows as usize);
        let mut next_id = start_marker_id;
        for row in 0..rows {
            for col in 0..columns {
                let is_marker = match kind {
                    BoardKind::GridBoard => true,
                    BoardKind::Charuco => (row + col) % 2 != rows % 2,
                };
                if is_marker {
                    cells.push(Cell::Marker { id: next_id });
                    next_id += 1;
                } else {
                    cells.push(Cell::Solid { dark: true });
                }
            }
        }
        let marker_count = (next_id - start_marker_id) as usize;
        Self {
            columns,
            cells,
            marker_count,
        }
    }

    /// Assignment of the cell at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells[(row * self.columns + col) as usize]
    }

    /// Number of marker cells on the board.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Row-major iteration over `(row, col, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i as u32 / columns, i as u32 % columns, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_ids(layout: &GridLayout) -> Vec<u32> {
        layout
            .cells()
            .filter_map(|(_, _, cell)| match cell {
                Cell::Marker { id } => Some(id),
                Cell::Solid { .. } => None,
            })
            .collect()
    }

    #[test]
    fn charuco_marker_count_is_half_rounded_up() {
        for (columns, rows) in [(4, 4), (5, 3), (3, 5), (12, 20), (2, 1)] {
            let layout = GridLayout::new(columns, rows, BoardKind::Charuco, 0);
            assert_eq!(
                layout.marker_count(),
                ((columns * rows) as usize).div_ceil(2),
                "{columns}x{rows}"
            );
            assert_eq!(
                layout.marker_count(),
                required_markers(columns, rows, BoardKind::Charuco)
            );
        }
    }

    #[test]
    fn grid_board_fills_every_cell() {
        let layout = GridLayout::new(3, 4, BoardKind::GridBoard, 5);
        assert_eq!(layout.marker_count(), 12);
        assert_eq!(marker_ids(&layout), (5..17).collect::<Vec<_>>());
    }

    #[test]
    fn ids_are_contiguous_in_row_major_order() {
        let layout = GridLayout::new(5, 4, BoardKind::Charuco, 7);
        let ids = marker_ids(&layout);
        assert_eq!(ids, (7..7 + ids.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn top_left_kind_follows_row_parity() {
        for rows in [3u32, 4, 5, 6] {
            let layout = GridLayout::new(4, rows, BoardKind::Charuco, 0);
            let top_left = layout.cell(0, 0);
            if rows % 2 == 0 {
                assert_eq!(top_left, Cell::Solid { dark: true }, "rows={rows}");
            } else {
                assert!(matches!(top_left, Cell::Marker { .. }), "rows={rows}");
            }
        }
    }

    #[test]
    fn cells_alternate_like_a_checkerboard() {
        let layout = GridLayout::new(6, 5, BoardKind::Charuco, 0);
        for (row, col, cell) in layout.cells() {
            if col + 1 < 6 {
                let right = layout.cell(row, col + 1);
                assert_ne!(
                    matches!(cell, Cell::Marker { .. }),
                    matches!(right, Cell::Marker { .. })
                );
            }
            if row + 1 < 5 {
                let below = layout.cell(row + 1, col);
                assert_ne!(
                    matches!(cell, Cell::Marker { .. }),
                    matches!(below, Cell::Marker { .. })
                );
            }
        }
    }
}
