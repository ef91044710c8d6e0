//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Othello is played on a fixed 8x8 grid:
//!
//! - **Columns**: `x` in 0..8, left to right
//! - **Rows**: `y` in 0..8, top to bottom
//! - **Cells**: 64 in total, 4 of them occupied at the start
//!
//! # Examples
//!
//! ```
//! use othello_types::{Outcome, Player, Score, BOARD_SIZE};
//!
//! // Players alternate
//! assert_eq!(Player::Black.opponent(), Player::White);
//!
//! // Score bookkeeping
//! let score = Score { black: 10, white: 6 };
//! assert_eq!(score.total(), 16);
//! assert_eq!(score.leader(), Some(Player::Black));
//! assert_eq!(score.outcome(), Outcome::Win(Player::Black));
//!
//! assert_eq!(BOARD_SIZE, 8);
//! ```

/// Board edge length in cells (8 columns, 8 rows)
pub const BOARD_SIZE: u8 = 8;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Number of stones on the board at the start of a game
pub const INITIAL_STONES: u8 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions() {
        assert_eq!(BOARD_SIZE, 8);
        assert_eq!(CELL_COUNT, 64);
        assert_eq!(INITIAL_STONES, 4);
    }

    #[test]
    fn player_opponent_is_an_involution() {
        for p in Player::ALL {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn cursor_moves_are_unit_steps() {
        for dir in [CursorMove::Up, CursorMove::Down, CursorMove::Left, CursorMove::Right] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn score_leader_and_outcome() {
        let even = Score { black: 32, white: 32 };
        assert_eq!(even.leader(), None);
        assert_eq!(even.outcome(), Outcome::Draw);

        let white = Score { black: 20, white: 44 };
        assert_eq!(white.leader(), Some(Player::White));
        assert_eq!(white.outcome(), Outcome::Win(Player::White));
        assert_eq!(white.count(Player::Black), 20);
    }
}

/// The two sides of an Othello game
///
/// Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, in move order
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-letter form used by board diagrams
    pub fn symbol(&self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell holding a stone of that colour
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<Player>;

/// Stone counts for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Stones of one colour
    pub fn count(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Stones on the board
    pub fn total(&self) -> u8 {
        self.black + self.white
    }

    /// Player with strictly more stones, `None` when level
    pub fn leader(&self) -> Option<Player> {
        if self.black > self.white {
            Some(Player::Black)
        } else if self.white > self.black {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Result of a finished game with these counts
    pub fn outcome(&self) -> Outcome {
        match self.leader() {
            Some(p) => Outcome::Win(p),
            None => Outcome::Draw,
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Winning player, `None` for a draw
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(*p),
            Outcome::Draw => None,
        }
    }
}

/// Cursor step on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

impl CursorMove {
    /// Offset as `(dx, dy)`
    pub fn delta(&self) -> (i8, i8) {
        match self {
            CursorMove::Up => (0, -1),
            CursorMove::Down => (0, 1),
            CursorMove::Left => (-1, 0),
            CursorMove::Right => (1, 0),
        }
    }
}

/// Presentation actions produced by user input
///
/// Mouse clicks carry coordinates and are handled separately; these are the
/// keyboard-driven actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the selection cursor one cell
    Cursor(CursorMove),
    /// Place a stone for the current player under the cursor
    Place,
    /// Discard the current game and start a new one
    Reset,
}
