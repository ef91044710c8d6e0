use tui_othello::core::{Board, GameState};
use tui_othello::term::{AnchorY, BoardView, FrameBuffer, HudState, Viewport, HINT_CHAR, STONE_CHAR};
use tui_othello::types::Player;

/// Characters inside board cell (x, y) for the default 4x2 view anchored at (0, 0).
fn cell_chars(fb: &FrameBuffer, x: u16, y: u16) -> Vec<char> {
    let mut out = Vec::new();
    for dy in 0..2 {
        for dx in 0..4 {
            out.push(fb.get(1 + x * 4 + dx, 1 + y * 2 + dy).unwrap().ch);
        }
    }
    out
}

#[test]
fn board_view_renders_border_corners() {
    let snap = GameState::new().snapshot();
    let view = BoardView::default();

    // 8 cells * 4 wide, 8 cells * 2 tall, plus border => 34x18
    let fb = view.render(&snap, Viewport::new(34, 18));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(33, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(33, 17).unwrap().ch, '┘');
}

#[test]
fn board_view_draws_stones_in_their_colours() {
    let snap = GameState::new().snapshot();
    let fb = BoardView::default().render(&snap, Viewport::new(34, 18));

    // White stone at (3, 3): inset by one column on each side.
    let row = 1 + 3 * 2;
    assert_eq!(fb.get(1 + 3 * 4, row).unwrap().ch, ' ');
    assert_eq!(fb.get(1 + 3 * 4 + 1, row).unwrap().ch, STONE_CHAR);
    assert_eq!(fb.get(1 + 3 * 4 + 2, row).unwrap().ch, STONE_CHAR);

    let white = fb.get(1 + 3 * 4 + 1, row).unwrap().style.fg;
    let black = fb.get(1 + 4 * 4 + 1, row).unwrap().style.fg;
    assert_ne!(white, black);
    assert!(white.r > black.r);
}

#[test]
fn board_view_marks_legal_moves_only() {
    let snap = GameState::new().snapshot();
    let fb = BoardView::default().render(&snap, Viewport::new(34, 18));

    let mut hinted = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            if cell_chars(&fb, x, y).contains(&HINT_CHAR) {
                hinted.push((x, y));
            }
        }
    }
    assert_eq!(hinted, vec![(3, 2), (2, 3), (5, 4), (4, 5)]);
}

#[test]
fn board_view_hints_can_be_disabled() {
    let snap = GameState::new().snapshot();
    let fb = BoardView::default()
        .with_hints(false)
        .render(&snap, Viewport::new(34, 18));
    assert!(!fb.text().contains(HINT_CHAR));
}

#[test]
fn board_view_highlights_cursor_cell() {
    let snap = GameState::new().snapshot();
    let view = BoardView::default();
    let plain = view.render(&snap, Viewport::new(34, 18));
    let hud = HudState {
        cursor: Some((0, 0)),
        message: None,
    };
    let lit = view.render_with_hud(&snap, &hud, Viewport::new(34, 18));

    assert_ne!(plain.get(1, 1).unwrap().style.bg, lit.get(1, 1).unwrap().style.bg);
    // Other cells are unchanged.
    assert_eq!(plain.get(9, 1), lit.get(9, 1));
}

#[test]
fn board_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new();
    game.place_stone(3, 2);
    let snap = game.snapshot();
    let hud = HudState {
        cursor: None,
        message: Some("hello there"),
    };

    let fb = BoardView::default().render_with_hud(&snap, &hud, Viewport::new(80, 18));
    let all = fb.text();
    assert!(all.contains("WHITE TO MOVE"));
    assert!(all.contains("BLACK 4"));
    assert!(all.contains("WHITE 1"));
    assert!(all.contains("hello there"));
}

#[test]
fn board_view_falls_back_to_status_line_when_narrow() {
    let snap = GameState::new().snapshot();
    let fb = BoardView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(34, 20));
    assert!(fb.row_text(18).starts_with("BLACK TO MOVE  B2 W2"));
}

#[test]
fn board_view_shows_result_when_game_is_over() {
    let board = Board::from_ascii(&("WWWWWWWW\n".repeat(5) + &"BBBBBBBB\n".repeat(3))).unwrap();
    let snap = GameState::from_board(board, Player::Black).snapshot();
    let fb = BoardView::default().render(&snap, Viewport::new(80, 18));
    let all = fb.text();
    assert!(all.contains("WHITE WINS"));
    assert!(!all.contains(HINT_CHAR));
}

#[test]
fn board_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new().snapshot();
    let fb = BoardView::default().render(&snap, Viewport::new(34, 30));

    // start_y = (30 - 18) / 2 = 6
    assert_eq!(fb.get(0, 6).unwrap().ch, '┌');
}

#[test]
fn board_view_can_anchor_board_to_top() {
    let snap = GameState::new().snapshot();
    let view = BoardView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(34, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(view.cell_at(Viewport::new(34, 30), 1, 1), Some((0, 0)));
}

#[test]
fn render_into_reuses_framebuffer_across_sizes() {
    let snap = GameState::new().snapshot();
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(34, 18), &mut fb);
    assert_eq!((fb.width(), fb.height()), (34, 18));

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert_eq!(fb, view.render(&snap, Viewport::new(80, 24)));
}
