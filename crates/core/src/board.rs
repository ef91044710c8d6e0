//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell can be empty or hold a black or white stone.
//! Uses a flat array for cache locality and so the whole board is a cheap `Copy` value.
//! Coordinates: (x, y) where x ranges 0..7 (left to right), y ranges 0..7 (top to bottom)

use std::fmt;

use crate::error::BoardParseError;
use crate::types::{Cell, Player, Score, BOARD_SIZE, CELL_COUNT};

/// The game board - 8 columns x 8 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create the standard starting position
    ///
    /// White on the main diagonal of the centre block, black on the other one.
    pub fn initial() -> Self {
        let mut board = Self::new();
        let mid = (BOARD_SIZE / 2) as i8;
        board.set(mid - 1, mid - 1, Some(Player::White));
        board.set(mid, mid, Some(Player::White));
        board.set(mid, mid - 1, Some(Player::Black));
        board.set(mid - 1, mid, Some(Player::Black));
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Check if position lies on the board
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_SIZE as i8 && y >= 0 && y < BOARD_SIZE as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is on the board and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position holds a stone of `player`
    pub fn is_player_at(&self, x: i8, y: i8, player: Player) -> bool {
        self.get(x, y) == Some(Some(player))
    }

    /// Count stones of each colour
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Player::Black => score.black += 1,
                Player::White => score.white += 1,
            }
        }
        score
    }

    /// Number of occupied cells
    pub fn stone_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    /// Check if every cell holds a stone
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D array
    pub fn to_rows(&self) -> [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let size = BOARD_SIZE as usize;
        let mut rows = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * size..(y + 1) * size]);
        }
        rows
    }

    /// Parse a board diagram
    ///
    /// Expects eight non-blank lines of eight characters each: `.` for an
    /// empty cell, `B` for black and `W` for white (case-insensitive).
    /// Surrounding whitespace on each line and blank lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use othello_core::Board;
    ///
    /// let board = Board::from_ascii(
    ///     "........
    ///      ........
    ///      ........
    ///      ...WB...
    ///      ...BW...
    ///      ........
    ///      ........
    ///      ........",
    /// )
    /// .unwrap();
    /// assert_eq!(board, Board::initial());
    /// ```
    pub fn from_ascii(diagram: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(BoardParseError::RowLength { row: y, len });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    'b' | 'B' => Some(Player::Black),
                    'w' | 'W' => Some(Player::White),
                    other => {
                        return Err(BoardParseError::BadChar {
                            ch: other,
                            row: y,
                            col: x,
                        })
                    }
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE as usize) {
            for cell in row {
                let ch = match cell {
                    Some(p) => p.symbol(),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
