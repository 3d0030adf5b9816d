//! Field module - the placement engine
//!
//! A [`Field`] owns the board, the single active piece and the set of cells
//! that piece is currently drawn on. Every request runs to completion before
//! returning:
//!
//! - [`Field::spawn_piece`] draws a kind and places it centered on the top row
//! - [`Field::move_piece`] translates the active piece one cell
//! - a Down move that cannot happen locks the piece and clears completed rows
//!
//! Rejected placements are ordinary results (`false` / [`MoveOutcome::Rejected`]);
//! only construction can fail.

use arrayvec::ArrayVec;
use log::{debug, trace, warn};

use crate::config::{ConfiguredKinds, FieldConfig};
use crate::core::{spawn_position, Board, FieldError, KindSource, UniformKinds, MAX_SHAPE_CELLS};
use crate::piece::{Piece, Point};
use crate::snapshot::FieldSnapshot;
use crate::types::{Block, Direction, PieceKind};

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece now sits one cell further in the requested direction
    Moved,
    /// Sideways move blocked; nothing changed
    Rejected,
    /// Down move blocked; the piece locked and there is no active piece
    Locked,
    /// There was no active piece to move
    NoActivePiece,
}

impl MoveOutcome {
    /// Whether the piece actually moved
    pub fn is_success(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// What happened when the last piece locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece at its final position
    pub piece: Piece,
    /// Rows cleared by this lock, top to bottom, indexed before the clear
    pub cleared_rows: Vec<usize>,
}

/// Placement engine: board, active piece and next-piece source
#[derive(Debug, Clone)]
pub struct Field<K = UniformKinds> {
    board: Board,
    active: Option<Piece>,
    /// Cells the active piece is drawn on; empty when there is none
    occupied: ArrayVec<Point, MAX_SHAPE_CELLS>,
    kinds: K,
    last_event: Option<LockEvent>,
    pieces_spawned: u32,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl Field<UniformKinds> {
    /// Empty field with uniform piece selection
    pub fn new(width: usize, height: usize, seed: u32) -> Result<Self, FieldError> {
        Ok(Self::with_kinds(
            Board::new(width, height)?,
            UniformKinds::new(seed),
        ))
    }
}

impl Field<ConfiguredKinds> {
    /// Empty field sized and seeded from configuration
    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        debug!(
            "field {}x{} seed={} randomizer={}",
            config.width,
            config.height,
            config.seed,
            config.randomizer.as_str()
        );
        Ok(Self::with_kinds(board, config.kind_source()))
    }
}

impl<K: KindSource> Field<K> {
    /// Field over an existing board, drawing kinds from `kinds`
    ///
    /// The board is taken as-is. Locked blocks on it are obstacles; any
    /// falling blocks are not tracked as an active piece.
    pub fn with_kinds(board: Board, kinds: K) -> Self {
        Self {
            board,
            active: None,
            occupied: ArrayVec::new(),
            kinds,
            last_event: None,
            pieces_spawned: 0,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn has_active_piece(&self) -> bool {
        self.active.is_some()
    }

    /// Cells currently drawn for the active piece
    pub fn occupied(&self) -> &[Point] {
        &self.occupied
    }

    pub fn kinds_mut(&mut self) -> &mut K {
        &mut self.kinds
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn the next piece from the kind source
    ///
    /// Returns false when the spawn position is blocked. That is the
    /// game-over signal for the driver; the field itself keeps no such state.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.kinds.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a piece of a specific kind, centered on the top row
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::new(kind);
        let (x, y) = spawn_position(self.board.width(), piece.shape());

        if !self.attempt_placement(piece, x, y) {
            warn!("spawn blocked for {:?} at ({}, {})", kind, x, y);
            return false;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!("spawned {:?} at ({}, {})", kind, x, y);
        true
    }

    /// Check whether `piece` could sit with its top-left corner at (x, y)
    ///
    /// Every filled cell must land inside the board on a cell that is empty
    /// or already drawn by a falling piece of the same kind, so the active
    /// piece never collides with its own footprint.
    pub fn can_place(&self, piece: Piece, x: i32, y: i32) -> bool {
        piece
            .cells_at(x, y)
            .all(|(px, py)| match self.board.get(px, py) {
                None => false,
                Some(None) => true,
                Some(Some(block)) => block.is_falling() && block.kind == piece.kind,
            })
    }

    /// Place `piece` at (x, y) and make it the active piece
    ///
    /// On failure nothing changes. On success the previous footprint is
    /// erased, the piece is drawn as falling blocks and its cells become the
    /// new occupancy set.
    pub fn attempt_placement(&mut self, piece: Piece, x: i32, y: i32) -> bool {
        if !self.can_place(piece, x, y) {
            trace!("cannot place {:?} at ({}, {})", piece.kind, x, y);
            return false;
        }

        for &(px, py) in &self.occupied {
            self.board.set(px, py, None);
        }
        self.occupied.clear();

        let placed = Piece { x, y, ..piece };
        let block = Some(Block::falling(placed.kind));
        for (px, py) in placed.cells() {
            self.board.set(px, py, block);
            self.occupied.push((px, py));
        }
        self.active = Some(placed);

        true
    }

    /// Move the active piece one cell
    ///
    /// Left and Right are simply rejected when blocked. A blocked Down locks
    /// the piece and clears any completed rows.
    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        let Some(active) = self.active else {
            return MoveOutcome::NoActivePiece;
        };

        let (dx, dy) = direction.offset();
        if self.attempt_placement(active, active.x + dx, active.y + dy) {
            return MoveOutcome::Moved;
        }

        match direction {
            Direction::Left | Direction::Right => MoveOutcome::Rejected,
            Direction::Down => {
                self.cement_piece();
                let cleared_rows = self.clear_completed_lines();
                self.last_event = Some(LockEvent {
                    piece: active,
                    cleared_rows,
                });
                MoveOutcome::Locked
            }
        }
    }

    /// Turn the active piece's blocks into locked blocks and drop the piece
    ///
    /// Assumes the piece's position is valid; it is not re-checked.
    fn cement_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        for (px, py) in piece.cells() {
            if let Some(Some(block)) = self.board.get(px, py) {
                self.board.set(px, py, Some(block.locked()));
            }
        }
        self.occupied.clear();
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);
    }

    fn clear_completed_lines(&mut self) -> Vec<usize> {
        let cleared = self.board.clear_completed_rows();
        if !cleared.is_empty() {
            self.lines_cleared = self.lines_cleared.wrapping_add(cleared.len() as u32);
            debug!("cleared rows {:?}", cleared);
        }
        cleared
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            rows: (0..self.board.height())
                .filter_map(|y| self.board.row_text(y))
                .collect(),
            active: self.active.map(Into::into),
            pieces_spawned: self.pieces_spawned,
            pieces_locked: self.pieces_locked,
            lines_cleared: self.lines_cleared,
        }
    }
}
