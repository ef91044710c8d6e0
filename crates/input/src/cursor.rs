//! Board selection cursor.

use crate::types::{CursorMove, BOARD_SIZE};

/// Keyboard selection on the 8x8 board
///
/// Moves are clamped at the edges rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    y: u8,
}

impl Cursor {
    /// Start on one of the opening moves for black
    pub fn new() -> Self {
        Self { x: 3, y: 2 }
    }

    pub fn at(x: u8, y: u8) -> Self {
        let max = BOARD_SIZE - 1;
        Self {
            x: x.min(max),
            y: y.min(max),
        }
    }

    pub fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    pub fn step(&mut self, dir: CursorMove) {
        let (dx, dy) = dir.delta();
        let max = (BOARD_SIZE - 1) as i8;
        self.x = (self.x as i8 + dx).clamp(0, max) as u8;
        self.y = (self.y as i8 + dy).clamp(0, max) as u8;
    }

    pub fn jump_to(&mut self, x: u8, y: u8) {
        *self = Self::at(x, y);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
