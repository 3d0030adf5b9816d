//! Board and piece catalog for the placement engine
//!
//! This crate holds the collaborators the placement engine works against.
//! None of it knows about an active piece or about movement:
//!
//! - [`board`]: fixed-size grid with bounds-checked get/set and row splicing
//! - [`pieces`]: the seven immutable shape matrices and spawn centering
//! - [`rng`]: pluggable next-piece sources (uniform, 7-bag, scripted)
//! - [`error`]: construction-time errors
//!
//! # Example
//!
//! ```
//! use tetris_field_core::{pieces, Board};
//! use tetris_field_core::types::{Block, PieceKind};
//!
//! let mut board = Board::new(4, 2).unwrap();
//! for (w, h) in pieces::shape(PieceKind::I).cells() {
//!     board.set(w as i32, 1 + h as i32, Some(Block::locked_of(PieceKind::I)));
//! }
//! assert!(board.is_row_full(1));
//!
//! assert_eq!(board.clear_completed_rows(), vec![1]);
//! assert_eq!(board.filled_count(), 0);
//! ```

pub mod board;
pub mod error;
pub mod pieces;
pub mod rng;

pub use tetris_field_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::FieldError;
pub use pieces::{shape, spawn_position, PieceShape, MAX_SHAPE_CELLS};
pub use rng::{KindSequence, KindSource, PieceQueue, SimpleRng, UniformKinds};
