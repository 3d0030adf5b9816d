//! Pieces module - tetromino shape matrices
//!
//! Each kind owns one immutable bounding-box matrix. There is no rotation, so
//! the spawn orientation is the only orientation.

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Bounding-box matrix of one piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct PieceShape {
    kind: PieceKind,
    /// Row-major; `.` marks an empty cell, anything else is filled
    rows: &'static [&'static [u8]],
}

impl PieceShape {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    /// Bounding-box width
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Bounding-box height
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the cell at (w, h) of the bounding box is part of the piece
    pub fn is_filled(&self, w: usize, h: usize) -> bool {
        self.rows
            .get(h)
            .and_then(|row| row.get(w))
            .is_some_and(|&b| b != b'.')
    }

    /// Filled cells as (w, h) offsets, scanning the box row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |h| {
            (0..self.width())
                .filter(move |&w| self.is_filled(w, h))
                .map(move |w| (w, h))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

/// Largest number of filled cells any shape may have (a full 4x4 box)
pub const MAX_SHAPE_CELLS: usize = 16;

static SHAPES: [PieceShape; PIECE_KIND_COUNT] = [
    PieceShape {
        kind: PieceKind::I,
        rows: &[b"IIII"],
    },
    PieceShape {
        kind: PieceKind::O,
        rows: &[b"OO", b"OO"],
    },
    PieceShape {
        kind: PieceKind::T,
        rows: &[b".T.", b"TTT"],
    },
    PieceShape {
        kind: PieceKind::S,
        rows: &[b".SS", b"SS."],
    },
    PieceShape {
        kind: PieceKind::Z,
        rows: &[b"ZZ.", b".ZZ"],
    },
    PieceShape {
        kind: PieceKind::L,
        rows: &[b"..L", b"LLL"],
    },
    PieceShape {
        kind: PieceKind::J,
        rows: &[b"J..", b"JJJ"],
    },
];

/// Get the shape matrix for a piece kind
pub fn shape(kind: PieceKind) -> &'static PieceShape {
    &SHAPES[kind.index()]
}

/// Spawn position for a shape on a board of the given width
///
/// Top row, bounding box centered: `floor(width / 2) - ceil(shape_width / 2)`.
/// The x may be negative when the piece is wider than the board; placement
/// then fails like any other out-of-bounds position.
pub fn spawn_position(board_width: usize, shape: &PieceShape) -> (i32, i32) {
    let center = (board_width / 2) as i32;
    let half = shape.width().div_ceil(2) as i32;
    (center - half, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_indexed_by_kind() {
        for kind in PieceKind::ALL {
            let s = shape(kind);
            assert_eq!(s.kind(), kind);
            assert_eq!(s.symbol(), kind.symbol());
        }
    }

    #[test]
    fn test_every_shape_is_a_tetromino() {
        for kind in PieceKind::ALL {
            let s = shape(kind);
            assert_eq!(s.cell_count(), 4, "{kind:?}");
            assert!(s.cell_count() <= MAX_SHAPE_CELLS);
            assert!(s.width() > 0 && s.height() > 0);
        }
    }

    #[test]
    fn test_shape_rows_are_rectangular() {
        for kind in PieceKind::ALL {
            let s = shape(kind);
            assert!(s.rows.iter().all(|r| r.len() == s.width()), "{kind:?}");
        }
    }

    #[test]
    fn test_t_cells_in_scan_order() {
        let cells: Vec<_> = shape(PieceKind::T).cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(!shape(PieceKind::T).is_filled(0, 0));
        assert!(!shape(PieceKind::T).is_filled(5, 5));
    }

    #[test]
    fn test_spawn_position_centering() {
        assert_eq!(spawn_position(10, shape(PieceKind::I)), (3, 0));
        assert_eq!(spawn_position(10, shape(PieceKind::O)), (4, 0));
        assert_eq!(spawn_position(10, shape(PieceKind::T)), (3, 0));
        assert_eq!(spawn_position(7, shape(PieceKind::L)), (1, 0));
        assert_eq!(spawn_position(2, shape(PieceKind::I)), (-1, 0));
    }
}
