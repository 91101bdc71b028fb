//! Terminal game runner.
//!
//! Hosts the three collaborators around the core simulation: the clock
//! (gravity ticks at the core's current drop interval), the input source
//! (key events mapped to commands), and the render surface (framebuffer
//! flushed after every tick and every key event).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::GameState;
use tui_blockfall::input::{map_key_event, should_quit};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);
    let mut state = GameState::new(seed);

    let view = GameView::default();
    let started = Instant::now();
    let mut last_drop = Instant::now();
    let mut ticking = true;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, started.elapsed(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next due tick.
        let interval = Duration::from_millis(state.drop_interval_ms() as u64);
        let timeout = if ticking {
            interval
                .checked_sub(last_drop.elapsed())
                .unwrap_or(Duration::ZERO)
        } else {
            // Game over: no more ticks to schedule, just wait for quit.
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        state.handle_command(command);
                    }
                }
            }
        }

        // Tick when due. A level-up inside the tick changes the drop
        // interval; the next iteration re-reads it (the reschedule).
        if ticking && last_drop.elapsed() >= interval {
            last_drop = Instant::now();
            if state.tick().is_stop() {
                ticking = false;
            }
        }
    }
}
