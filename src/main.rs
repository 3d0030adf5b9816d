//! Headless gravity driver (default binary).
//!
//! Plays pieces on a field configured from the environment: each piece is
//! nudged sideways by a seeded amount, then dropped one row at a time until it
//! locks. Stops when a spawn is blocked or `TETRIS_MAX_PIECES` pieces have
//! locked, then prints the final snapshot as JSON.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to follow every
//! spawn and lock.

use anyhow::{Context, Result};
use log::info;

use tetris_field::core::SimpleRng;
use tetris_field::engine::{Field, FieldConfig, MoveOutcome};
use tetris_field::types::Direction;

const DEFAULT_MAX_PIECES: u32 = 200;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FieldConfig::from_env();
    let max_pieces = std::env::var("TETRIS_MAX_PIECES")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_MAX_PIECES);

    let mut field = Field::from_config(&config).context("invalid field configuration")?;
    info!(
        "playing up to {} pieces on {}x{} (seed {}, {})",
        max_pieces,
        config.width,
        config.height,
        config.seed,
        config.randomizer.as_str()
    );

    let mut nudge = SimpleRng::new(config.seed.rotate_left(16));
    while field.pieces_locked() < max_pieces {
        if !field.spawn_piece() {
            info!("spawn blocked after {} pieces", field.pieces_locked());
            break;
        }

        let shift = nudge.next_range(config.width as u32) as i32 - (config.width / 2) as i32;
        let direction = if shift < 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        for _ in 0..shift.unsigned_abs() {
            if !field.move_piece(direction).is_success() {
                break;
            }
        }

        while field.move_piece(Direction::Down) == MoveOutcome::Moved {}

        if let Some(event) = field.take_last_event() {
            if !event.cleared_rows.is_empty() {
                info!(
                    "{:?} at x={} cleared rows {:?} (total {})",
                    event.piece.kind,
                    event.piece.x,
                    event.cleared_rows,
                    field.lines_cleared()
                );
            }
        }
    }

    let snapshot = field.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?
    );
    Ok(())
}
