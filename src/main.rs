//! Terminal falling-block runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Gravity runs on
//! a wall-clock timer; key presses are handled as soon as they arrive.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_blockfall::term::{FrameBuffer, GameView, Palette, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;
use tui_blockfall::{logging, Flow, GameConfig, Session};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    // Validate the board before touching the terminal.
    let mut session = Session::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.board().score(), "quit");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &GameConfig) -> Result<()> {
    let view = GameView::new(Palette::classic());
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_update = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_warning(
            session.board(),
            session.log(),
            session.warning(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Once the game is over, block until the player retries or quits.
        let game_over = session.board().is_game_over();
        let ready = if game_over {
            true
        } else {
            let until_update = config.update_delay.saturating_sub(last_update.elapsed());
            event::poll(until_update.min(frame))?
        };

        if ready {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if session.handle_key(key)? == Flow::Quit {
                        return Ok(());
                    }
                    if game_over && !session.board().is_game_over() {
                        last_update = Instant::now();
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if !session.board().is_game_over() && last_update.elapsed() >= config.update_delay {
            session.tick();
            last_update = Instant::now();
        }
    }
}
