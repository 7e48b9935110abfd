mod app;
mod background;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use app::{AppState, KeyAction};

use crate::presentation::view_models::DashboardViewModel;

/// What the dashboard loop needs from its handler.
pub trait DashboardSource {
    /// Contents of the next frame.
    fn view_model(&mut self) -> DashboardViewModel;

    /// The watering button was pressed.
    fn press_toggle(&mut self);
}

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaves the alternate screen even when the loop returns early.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    pub fn run(&self, source: &mut dyn DashboardSource) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let _guard = TerminalGuard;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app_state = AppState::new();

        loop {
            let view_model = source.view_model();
            app_state.set_row_count(view_model.rows.len());

            terminal.draw(|f| {
                ui::draw(f, &view_model, &mut app_state);
            })?;

            if !event::poll(self.tick_rate)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app_state.handle_key(key) {
                    KeyAction::Quit => break,
                    KeyAction::ToggleWatering => source.press_toggle(),
                    KeyAction::None => {}
                }
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }
}
