//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds a
//! [`Block`]. Storage is a sequence of rows so that completed rows can be
//! spliced out and re-inserted at the top without copying cells around.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use std::fmt;

use crate::error::FieldError;
use crate::types::{cell_symbol, Block, Cell, EMPTY_SYMBOL};

/// The game board - fixed dimensions, row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// `rows[y][x]`, row 0 is the top of the board
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Zero width or height is rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            rows: vec![vec![None; width]; height],
        })
    }

    /// Build a board from its text form, one string per row
    ///
    /// `.` is empty, uppercase letters are falling blocks and lowercase
    /// letters are locked blocks (see [`Block::symbol`]).
    pub fn from_text(rows: &[&str]) -> Result<Self, FieldError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(width, height)?;

        for (y, text) in rows.iter().enumerate() {
            let actual = text.chars().count();
            if actual != width {
                return Err(FieldError::RowWidthMismatch {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, symbol) in text.chars().enumerate() {
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let block = Block::from_symbol(symbol)
                    .ok_or(FieldError::InvalidCellSymbol { symbol, x, y })?;
                board.rows[y][x] = Some(block);
            }
        }

        Ok(board)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position is inside the board
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Borrow a single row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Clear every completed row and move it, emptied, to the top.
    ///
    /// Returns the indices of the cleared rows as they were before the clear,
    /// top to bottom. Rows above a cleared row drop by one for each cleared
    /// row below them; the row count never changes.
    pub fn clear_completed_rows(&mut self) -> Vec<usize> {
        let cleared: Vec<usize> = (0..self.height).filter(|&y| self.is_row_full(y)).collect();
        if cleared.is_empty() {
            return cleared;
        }

        // Remove bottom-up so the remaining indices stay valid.
        let mut emptied = Vec::with_capacity(cleared.len());
        for &y in cleared.iter().rev() {
            let mut row = self.rows.remove(y);
            row.fill(None);
            emptied.push(row);
        }
        emptied.reverse();
        self.rows.splice(0..0, emptied);

        debug_assert_eq!(self.rows.len(), self.height);
        cleared
    }

    /// Count of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// Text form of one row
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.row(y)
            .map(|row| row.iter().map(|&c| cell_symbol(c)).collect())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(None);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell_symbol(cell))?;
            }
        }
        Ok(())
    }
}
