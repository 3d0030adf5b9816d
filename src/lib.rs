//! Tetris field (workspace facade crate).
//!
//! Exposes the workspace as `tetris_field::{core,engine,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tetris_field_core as core;
pub use tetris_field_engine as engine;
pub use tetris_field_types as types;
