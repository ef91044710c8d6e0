//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::UiAction`] and keeps the
//! keyboard selection [`Cursor`]. Mouse hit-testing depends on the board
//! layout and lives with the view in the `term` crate.

pub mod cursor;
pub mod map;

pub use othello_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
