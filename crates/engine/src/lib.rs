//! Placement engine - pure, deterministic, and testable
//!
//! This crate decides where the falling piece may sit, moves it, locks it
//! into the board and clears completed rows. It has no notion of time,
//! input or rendering; a driver issues discrete requests and reads results.
//!
//! # Module Structure
//!
//! - [`field`]: the [`Field`] engine (spawn, move, lock, line clear)
//! - [`piece`]: a piece kind bound to a board position
//! - [`config`]: board size and next-piece policy, with environment overrides
//! - [`snapshot`]: serializable read-only view of a field
//!
//! # Rules
//!
//! - **Spawn**: top row, bounding box centered (`floor(W/2) - ceil(w/2)`)
//! - **Moves**: Down, Left and Right by one cell; there is no rotation
//! - **Lock**: a Down move that cannot happen locks the piece in place
//! - **Line clear**: after every lock, full rows are emptied and moved to the top
//!
//! # Example
//!
//! ```
//! use tetris_field_engine::{Field, MoveOutcome};
//! use tetris_field_engine::types::Direction;
//!
//! let mut field = Field::new(10, 20, 12345).unwrap();
//! assert!(field.spawn_piece());
//!
//! // Let the piece fall until it locks.
//! while field.move_piece(Direction::Down) == MoveOutcome::Moved {}
//!
//! assert!(!field.has_active_piece());
//! assert_eq!(field.pieces_locked(), 1);
//! ```

pub mod config;
pub mod field;
pub mod piece;
pub mod snapshot;

pub use tetris_field_core as core;
pub use tetris_field_types as types;

pub use config::{ConfiguredKinds, FieldConfig, Randomizer};
pub use field::{Field, LockEvent, MoveOutcome};
pub use piece::{Piece, Point};
pub use snapshot::{ActiveSnapshot, FieldSnapshot};
