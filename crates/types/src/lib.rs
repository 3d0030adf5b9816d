//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! They are plain data with no behavior beyond parsing and formatting, so the
//! board, the piece catalog and the placement engine can all agree on them.
//!
//! # Board Dimensions
//!
//! The field size is chosen at construction time. The defaults match the
//! standard playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Cells
//!
//! A cell is either empty (`None`) or holds a [`Block`]: the kind of piece
//! that put it there plus whether that piece is still falling or has locked.
//! The text form keeps the classic convention of uppercase letters for the
//! falling piece and lowercase letters for settled blocks.
//!
//! # Examples
//!
//! ```
//! use tetris_field_types::{Block, CellState, Direction, PieceKind};
//!
//! let kind = PieceKind::from_symbol('t').unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let block = Block::falling(kind);
//! assert_eq!(block.symbol(), 'T');
//! assert_eq!(block.locked().symbol(), 't');
//! assert_eq!(block.locked().state, CellState::Locked);
//!
//! assert_eq!(Direction::Left.offset(), (-1, 0));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: usize = 7;

/// Character used for an empty cell in text form
pub const EMPTY_SYMBOL: char = '.';

/// The seven tetromino piece kinds
///
/// The set is closed: anything that produces a `PieceKind` has already
/// produced one of the seven valid kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Look up a kind by catalog index (0..7)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_field_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Parse a kind from its letter (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_field_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }

    /// Uppercase letter identifying this kind
    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Whether a block still belongs to the falling piece or has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Falling,
    Locked,
}

/// Contents of a non-empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub kind: PieceKind,
    pub state: CellState,
}

impl Block {
    pub fn falling(kind: PieceKind) -> Self {
        Self {
            kind,
            state: CellState::Falling,
        }
    }

    pub fn locked_of(kind: PieceKind) -> Self {
        Self {
            kind,
            state: CellState::Locked,
        }
    }

    /// The same block in its settled state
    pub fn locked(self) -> Self {
        Self {
            state: CellState::Locked,
            ..self
        }
    }

    pub fn is_falling(&self) -> bool {
        self.state == CellState::Falling
    }

    /// Text form: uppercase while falling, lowercase once locked
    pub fn symbol(&self) -> char {
        match self.state {
            CellState::Falling => self.kind.symbol(),
            CellState::Locked => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Parse the text form produced by [`Block::symbol`]
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = PieceKind::from_symbol(c)?;
        let state = if c.is_ascii_uppercase() {
            CellState::Falling
        } else {
            CellState::Locked
        };
        Some(Self { kind, state })
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(Block)`: Cell filled by a falling or locked piece
pub type Cell = Option<Block>;

/// Text form of a cell
pub fn cell_symbol(cell: Cell) -> char {
    cell.map_or(EMPTY_SYMBOL, |b| b.symbol())
}

/// Translation requests a driver may issue
///
/// There is no rotation: pieces only move sideways or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) applied to the piece's top-left corner
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
