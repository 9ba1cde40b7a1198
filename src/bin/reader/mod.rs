//! Terminal reader: walks the book one word at a time
pub mod app;
pub mod ui;

use anyhow::Result;
use app::{App, Control};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use proust::proust::ast::UnitTree;
use proust_config::ReaderConfig;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

/// Run the reader until the user quits. Fails before touching the terminal
/// when the book has no paragraph.
pub fn run_reader(tree: &UnitTree, config: &ReaderConfig, title: &str) -> Result<()> {
    let mut app = App::new(tree, config, title)?;

    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App<'_>) -> Result<()> {
    let mut next_tick = Instant::now() + app.interval();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Waiting on input doubles as the pacing delay, so keys interrupt it.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Control::Quit => return Ok(()),
                        Control::Repace => next_tick = Instant::now() + app.interval(),
                        Control::Continue => {}
                    }
                }
            }
        }

        if Instant::now() >= next_tick {
            app.tick()?;
            next_tick = Instant::now() + app.interval();
        }
    }
}
