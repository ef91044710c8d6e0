//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and it owns the
//! board geometry, so mouse hit-testing lives here too.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Outcome, Player, BOARD_SIZE};

/// Glyph used to paint stones.
pub const STONE_CHAR: char = '█';

/// Glyph marking an empty cell where the current player may place.
pub const HINT_CHAR: char = '·';

const BLACK_STONE: Rgb = Rgb::new(15, 15, 15);
const WHITE_STONE: Rgb = Rgb::new(240, 240, 240);
const FELT_LIGHT: Rgb = Rgb::new(24, 120, 64);
const FELT_DARK: Rgb = Rgb::new(18, 100, 54);
const CURSOR_BG: Rgb = Rgb::new(190, 160, 50);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state drawn on top of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudState<'a> {
    /// Highlighted cell `(x, y)`
    pub cursor: Option<(u8, u8)>,
    /// One-line notice, e.g. why a move was rejected
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the Othello board.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_hints: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical terminal glyphs.
        Self::new(4, 2)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            show_hints: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    fn board_px(&self) -> (u16, u16) {
        (
            (BOARD_SIZE as u16) * self.cell_w,
            (BOARD_SIZE as u16) * self.cell_h,
        )
    }

    /// Outer frame size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        let (w, h) = self.board_px();
        (w + 2, h + 2)
    }

    /// Top-left corner of the frame for a viewport.
    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Map a terminal position to the board cell under it.
    ///
    /// Returns `None` for the border and everything outside the board.
    pub fn cell_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<(u8, u8)> {
        let (start_x, start_y) = self.origin(viewport);
        let (board_w, board_h) = self.board_px();
        let px = column.checked_sub(start_x + 1)?;
        let py = row.checked_sub(start_y + 1)?;
        if px >= board_w || py >= board_h {
            return None;
        }
        Some(((px / self.cell_w) as u8, (py / self.cell_h) as u8))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, &HudState::default(), viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &HudState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin(viewport);

        let border = CellStyle::colors(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let highlighted = hud.cursor == Some((x, y));
                self.draw_cell(fb, snap, start_x, start_y, x, y, highlighted);
            }
        }

        let panel_drawn = self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);
        if !panel_drawn {
            self.draw_status_below(fb, snap, hud, start_x, start_y + frame_h);
        }

        if let Some(outcome) = snap.outcome {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, outcome_text(outcome));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: &HudState<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        x: u8,
        y: u8,
        highlighted: bool,
    ) {
        let felt = if (x + y) % 2 == 0 { FELT_LIGHT } else { FELT_DARK };
        let bg = if highlighted { CURSOR_BG } else { felt };
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::colors(felt, bg));

        match snap.cell(x, y) {
            Some(player) => {
                // Leave a column of felt on both sides when the cell is wide enough.
                let inset = if self.cell_w >= 4 { 1 } else { 0 };
                let style = CellStyle::colors(stone_color(player), bg).bold();
                fb.fill_rect(px + inset, py, self.cell_w - 2 * inset, self.cell_h, STONE_CHAR, style);
            }
            None if self.show_hints && snap.is_valid_move(x, y) => {
                let style = CellStyle::colors(hint_color(snap.current_player), bg);
                fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, HINT_CHAR, style);
            }
            None => {}
        }
    }

    /// Draw the status panel to the right of the board.
    ///
    /// Returns false when the viewport is too narrow for it.
    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudState<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) -> bool {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 16 {
            return false;
        }

        let label = CellStyle::colors(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::colors(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "OTHELLO", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, status_text(snap), label);
        y = y.saturating_add(2);

        for player in Player::ALL {
            let end = fb.put_str(panel_x, y, player_label(player), value);
            fb.put_u32(end + 1, y, snap.score.count(player) as u32, value);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        if let Some(msg) = hud.message {
            fb.put_str(panel_x, y, msg, CellStyle::colors(Rgb::new(240, 200, 90), PANEL_BG));
        }
        y = y.saturating_add(2);

        for line in ["ARROWS move", "ENTER  place", "R      reset", "Q      quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
        true
    }

    fn draw_status_below(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudState<'_>,
        x: u16,
        y: u16,
    ) {
        let style = CellStyle::default();
        let mut cx = fb.put_str(x, y, status_text(snap), style.bold());
        cx = fb.put_str(cx, y, "  B", style);
        cx = fb.put_u32(cx, y, snap.score.black as u32, style);
        cx = fb.put_str(cx, y, " W", style);
        fb.put_u32(cx, y, snap.score.white as u32, style);
        if let Some(msg) = hud.message {
            fb.put_str(x, y.saturating_add(1), msg, style.dim());
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::colors(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn stone_color(player: Player) -> Rgb {
    match player {
        Player::Black => BLACK_STONE,
        Player::White => WHITE_STONE,
    }
}

fn hint_color(player: Player) -> Rgb {
    match player {
        Player::Black => Rgb::new(10, 40, 20),
        Player::White => Rgb::new(200, 235, 210),
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::Black => "BLACK",
        Player::White => "WHITE",
    }
}

fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::Black) => " BLACK WINS ",
        Outcome::Win(Player::White) => " WHITE WINS ",
        Outcome::Draw => " DRAW ",
    }
}

/// Turn indicator or final result.
pub fn status_text(snap: &GameSnapshot) -> &'static str {
    match snap.outcome {
        Some(outcome) => outcome_text(outcome).trim(),
        None => match snap.current_player {
            Player::Black => "BLACK TO MOVE",
            Player::White => "WHITE TO MOVE",
        },
    }
}
