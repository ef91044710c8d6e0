use crate::types::{Cell, Outcome, Player, Score, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Everything a view needs to draw one frame
///
/// Plain data; rendering never touches the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major cells, `board[y][x]`
    pub board: [[Cell; N]; N],
    pub current_player: Player,
    pub score: Score,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    /// Cells where `current_player` may place, `valid_moves[y][x]`
    ///
    /// All false once the game is over.
    pub valid_moves: [[bool; N]; N],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; N]; N];
        self.current_player = Player::Black;
        self.score = Score::default();
        self.game_over = false;
        self.outcome = None;
        self.valid_moves = [[false; N]; N];
    }

    pub fn cell(&self, x: u8, y: u8) -> Cell {
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }

    pub fn is_valid_move(&self, x: u8, y: u8) -> bool {
        self.valid_moves
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[None; N]; N],
            current_player: Player::Black,
            score: Score::default(),
            game_over: false,
            outcome: None,
            valid_moves: [[false; N]; N],
        };
        s.clear();
        s
    }
}
