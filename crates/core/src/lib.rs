//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Othello rules, state management, and move
//! validation. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: The same sequence of placements always yields the same game
//! - **Testable**: Positions can be set up from text diagrams
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Cheap to copy**: The board is a 64-cell value type
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with bounds-checked access and diagram parsing
//! - [`rules`]: Direction table, bracket walk and capture
//! - [`game_state`]: Turn order, placement, forced passes, game end
//! - [`snapshot`]: Plain data copy of the state for rendering
//! - [`error`]: Move and diagram errors
//!
//! # Game Rules
//!
//! - Black moves first from the standard four-stone centre position
//! - A placement must bracket at least one run of opponent stones between
//!   the new stone and an existing one in any of the eight directions
//! - Every bracketed run flips, each direction independently
//! - If the next player has no legal move the turn returns to the mover
//! - The game ends when the board is full or neither side can move; more
//!   stones wins
//!
//! # Example
//!
//! ```
//! use othello_core::GameState;
//! use othello_types::{Player, Score};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.current_player(), Player::Black);
//!
//! // Black captures the white stone at (3, 3)
//! assert!(game.place_stone(3, 2));
//! assert_eq!(game.score(), Score { black: 4, white: 1 });
//! assert_eq!(game.current_player(), Player::White);
//!
//! // Occupied cells are rejected without changing anything
//! assert!(!game.place_stone(3, 3));
//! assert_eq!(game.stones_placed(), 5);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use othello_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{BoardParseError, MoveError};
pub use game_state::{GameState, MoveOutcome};
pub use rules::DIRECTIONS;
pub use snapshot::GameSnapshot;
