//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids ratatui widgets/layout and instead renders into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render purely from a `GameSnapshot`, never from the live game
//! - Keep cells close to square (4 chars wide, 2 rows tall by default)
//! - Own the board geometry so clicks map back to board cells

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use othello_core as core;
pub use othello_types as types;

pub use board_view::{status_text, AnchorY, BoardView, HudState, Viewport, HINT_CHAR, STONE_CHAR};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
