use crate::core::{shape, PieceShape};
use crate::types::PieceKind;

/// Board coordinate (x, y)
pub type Point = (i32, i32);

/// A piece kind bound to a board position (top-left of its bounding box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at the origin; spawning moves it to its real position
    pub fn new(kind: PieceKind) -> Self {
        Self { kind, x: 0, y: 0 }
    }

    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// The kind's static shape matrix
    pub fn shape(&self) -> &'static PieceShape {
        shape(self.kind)
    }

    /// Board coordinates of every filled cell at the current position
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        self.cells_at(self.x, self.y)
    }

    /// Board coordinates of every filled cell if the piece sat at (x, y)
    pub fn cells_at(&self, x: i32, y: i32) -> impl Iterator<Item = Point> {
        self.shape()
            .cells()
            .map(move |(w, h)| (x + w as i32, y + h as i32))
    }
}
