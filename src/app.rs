//! Presentation controller.
//!
//! Sits between input and the rules engine: keeps the selection cursor and a
//! one-line message, forwards selections to the engine, and rebuilds the
//! engine on reset. Holds no terminal state, so it is tested headless.

use tracing::info;

use crate::core::{GameSnapshot, GameState, MoveError, MoveOutcome};
use crate::input::Cursor;
use crate::term::HudState;
use crate::types::{Player, UiAction};

#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Cursor,
    message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Cursor::new(),
            message: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Apply a keyboard action.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Cursor(dir) => self.cursor.step(dir),
            UiAction::Place => {
                let (x, y) = self.cursor.position();
                // Rejections are reported through `message`.
                let _ = self.select(x as i8, y as i8);
            }
            UiAction::Reset => self.reset(),
        }
    }

    /// Place a stone for the current player at a selected cell.
    ///
    /// On success the cursor follows the placed stone. On failure the game
    /// and cursor are untouched and only the message line reports why.
    pub fn select(&mut self, x: i8, y: i8) -> Result<MoveOutcome, MoveError> {
        match self.game.try_place(x, y) {
            Ok(outcome) => {
                // Accepted coordinates are on the board.
                self.cursor.jump_to(x as u8, y as u8);
                self.message = None;
                if let Some(result) = self.game.outcome() {
                    let score = self.game.score();
                    info!(?result, black = score.black, white = score.white, "game over");
                } else if outcome.passed {
                    self.message = Some(format!(
                        "{} has no move, {} again",
                        label(outcome.mover.opponent()),
                        label(outcome.mover)
                    ));
                }
                Ok(outcome)
            }
            Err(err) => {
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Throw the current game away and start a fresh one.
    pub fn reset(&mut self) {
        self.game = GameState::new();
        self.cursor = Cursor::new();
        self.message = None;
        info!("new game");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Overlay state for the board view.
    pub fn hud(&self) -> HudState<'_> {
        HudState {
            cursor: Some(self.cursor.position()),
            message: self.message(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn label(player: Player) -> &'static str {
    match player {
        Player::Black => "BLACK",
        Player::White => "WHITE",
    }
}
