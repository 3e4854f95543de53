mod app;
mod components;
mod ui;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

pub use app::{AppState, Control, Focus};

/// Interactive feed view. Redraws on every key and every tick so relative
/// times stay current.
pub struct TuiRenderer {
    tick_rate: Duration,
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self, mut state: AppState) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        tracing::debug!(posts = state.feed().len(), "tui started");
        let result = self.event_loop(&mut terminal, &mut state);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, state, Utc::now()))?;

            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
                && state.handle_key(key, Utc::now()) == Control::Quit
            {
                return Ok(());
            }
        }
    }
}
