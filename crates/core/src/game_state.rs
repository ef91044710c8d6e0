//! Game state module - manages the complete game state
//!
//! This module ties together the board and the capture rules. It owns whose
//! turn it is, applies placements, and handles forced passes and the end of
//! the game.

use tracing::{debug, instrument, trace};

use crate::board::Board;
use crate::error::MoveError;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Outcome, Player, Score, BOARD_SIZE, CELL_COUNT, INITIAL_STONES};

/// Result of an accepted placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player who placed the stone
    pub mover: Player,
    /// Stones converted to the mover's colour (the placed stone excluded)
    pub flipped: usize,
    /// Player whose turn it is now
    pub next: Player,
    /// True when the opponent had no legal move and the turn came back
    pub passed: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    /// Occupied cells, kept in step with `board` on every placement.
    stones_placed: u8,
}

impl GameState {
    /// Create a new game in the standard starting position, black to move
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            current_player: Player::Black,
            stones_placed: INITIAL_STONES,
        }
    }

    /// Create a game from an arbitrary position
    ///
    /// The stone count is taken from the board. No pass is applied: if
    /// `to_move` has no legal move the game simply reports it.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            current_player: to_move,
            stones_placed: board.stone_count(),
        }
    }

    /// Discard this game and start over from the initial position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Copy of the board
    ///
    /// The board is a value; changing the copy never affects the game.
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn stones_placed(&self) -> u8 {
        self.stones_placed
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Check if the game has ended
    ///
    /// The game ends when the board is full or neither player can move.
    pub fn is_game_over(&self) -> bool {
        if self.stones_placed as usize >= CELL_COUNT {
            return true;
        }
        !self.has_valid_move(Player::Black) && !self.has_valid_move(Player::White)
    }

    /// Final result, `None` while play continues
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_game_over() {
            Some(self.score().outcome())
        } else {
            None
        }
    }

    /// Winner of a finished game
    ///
    /// `None` both while the game is still running and for a draw.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        rules::any_legal(&self.board, player)
    }

    /// Check if `player` may place at (x, y)
    ///
    /// Off-board coordinates are reported as illegal.
    pub fn is_valid_move(&self, x: i8, y: i8, player: Player) -> bool {
        rules::is_legal(&self.board, x, y, player)
    }

    /// All legal cells for `player`, row-major
    pub fn valid_moves(&self, player: Player) -> Vec<(i8, i8)> {
        let size = BOARD_SIZE as i8;
        let mut moves = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if self.is_valid_move(x, y, player) {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    /// Place a stone for the current player
    ///
    /// Returns false, leaving the game untouched, if the move is illegal.
    pub fn place_stone(&mut self, x: i8, y: i8) -> bool {
        self.try_place(x, y).is_ok()
    }

    /// Place a stone for the current player, reporting why a move failed
    ///
    /// On success every bracketed run is flipped, the turn passes to the
    /// opponent, and comes straight back if the opponent has no legal move.
    #[instrument(level = "trace", skip(self), fields(player = ?self.current_player))]
    pub fn try_place(&mut self, x: i8, y: i8) -> Result<MoveOutcome, MoveError> {
        let mover = self.current_player;
        if let Err(err) = self.check_move(x, y, mover) {
            trace!(%err, "move rejected");
            return Err(err);
        }

        self.board.set(x, y, Some(mover));
        self.stones_placed += 1;
        let flipped = rules::apply_captures(&mut self.board, x, y, mover);

        self.next_player();
        let passed = !self.has_valid_move(self.current_player);
        if passed {
            debug!(passer = ?self.current_player, "no legal move, turn passes back");
            self.next_player();
        }

        debug!(
            ?mover,
            x,
            y,
            flipped,
            stones = self.stones_placed,
            "stone placed"
        );

        Ok(MoveOutcome {
            mover,
            flipped,
            next: self.current_player,
            passed,
        })
    }

    fn check_move(&self, x: i8, y: i8, player: Player) -> Result<(), MoveError> {
        match self.board.get(x, y) {
            None => Err(MoveError::OutOfBounds { x, y }),
            Some(Some(_)) => Err(MoveError::Occupied { x, y }),
            Some(None) if !self.is_valid_move(x, y, player) => Err(MoveError::NoCapture { x, y }),
            Some(None) => Ok(()),
        }
    }

    fn next_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Build a render snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let size = BOARD_SIZE as i8;
        out.board = self.board.to_rows();
        out.current_player = self.current_player;
        out.score = self.score();
        out.outcome = self.outcome();
        out.game_over = out.outcome.is_some();
        for y in 0..size {
            for x in 0..size {
                out.valid_moves[y as usize][x as usize] =
                    !out.game_over && self.is_valid_move(x, y, self.current_player);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
