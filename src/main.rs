//! Terminal Othello runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a framebuffer-based
//! renderer (no ratatui widgets/layout). Input is event driven: the loop
//! blocks until the user does something, then redraws.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{debug, info};

use tui_othello::input::{handle_key_event, should_quit};
use tui_othello::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_othello::{logging, App, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let view = config.board_view();
    let mut app = App::new();
    let mut snap = app.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        app.snapshot_into(&mut snap);
        view.render_into_with_hud(&snap, &app.hud(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.apply(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some((x, y)) = view.cell_at(viewport, mouse.column, mouse.row) {
                    if let Err(err) = app.select(x as i8, y as i8) {
                        debug!(%err, "click ignored");
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
