//! Terminal input monitor (default binary).
//!
//! Polls crossterm and drives a [`Monitor`] session: events as they arrive,
//! one tick per configured interval, then a redraw.
//!
//! Usage: `frame-input [config.json]`. `RUST_LOG` controls stderr logging.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;

use frame_input::normalize::{TerminalCursor, TerminalDevices};
use frame_input::term::TerminalRenderer;
use frame_input::{Flow, Monitor, MonitorConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => MonitorConfig::load(&path)
            .with_context(|| format!("loading {}", path.to_string_lossy()))?,
        None => MonitorConfig::default(),
    }
    .with_env_overrides();
    log::info!("starting with {config:?}");

    let mut term = TerminalRenderer::new(config.mouse_capture);
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &MonitorConfig) -> Result<()> {
    let mut monitor = Monitor::new(config, term.reports_key_release());
    let mut cursor = TerminalCursor::new(io::stdout());
    monitor.load_devices(&mut TerminalDevices::from_env(config.mouse_capture));

    let tick = config.tick();
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            if monitor.handle_event(&ev) == Flow::Quit {
                return Ok(());
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let viewport = terminal::size().unwrap_or((80, 24));
            if monitor.tick(&mut cursor, viewport) == Flow::Quit {
                return Ok(());
            }
            term.draw(monitor.render(viewport.0))?;
        }
    }
}
