use serde::{Deserialize, Serialize};

use crate::core::{Board, FieldError};
use crate::piece::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of a field for drivers and observers
///
/// `rows` uses the board's text form: `.` empty, uppercase for the falling
/// piece, lowercase for locked blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub active: Option<ActiveSnapshot>,
    pub pieces_spawned: u32,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl FieldSnapshot {
    /// Rebuild the board this snapshot was taken from
    pub fn board(&self) -> Result<Board, FieldError> {
        let rows: Vec<&str> = self.rows.iter().map(String::as_str).collect();
        Board::from_text(&rows)
    }

    pub fn has_active_piece(&self) -> bool {
        self.active.is_some()
    }
}
