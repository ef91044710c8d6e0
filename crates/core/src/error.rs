//! Error types for the rules engine.

use thiserror::Error;

/// Why a stone could not be placed
///
/// A rejected placement never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({x}, {y}) is off the board")]
    OutOfBounds { x: i8, y: i8 },
    #[error("({x}, {y}) is already occupied")]
    Occupied { x: i8, y: i8 },
    #[error("({x}, {y}) does not capture any stones")]
    NoCapture { x: i8, y: i8 },
}

/// Malformed board diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadChar { ch: char, row: usize, col: usize },
}
