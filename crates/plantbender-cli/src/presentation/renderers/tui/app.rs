use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Quit,
    ToggleWatering,
    None,
}

/// Renderer-local state: only the history scroll position.
pub(crate) struct AppState {
    pub table_state: TableState,
    row_count: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            row_count: 0,
        }
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        match self.table_state.selected() {
            Some(_) if row_count == 0 => self.table_state.select(None),
            Some(i) if i >= row_count => self.table_state.select(Some(row_count - 1)),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        if self.row_count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.row_count - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.row_count == 0 {
            return;
        }
        let previous = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('w') | KeyCode::Char(' ') | KeyCode::Enter => KeyAction::ToggleWatering,
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                KeyAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = AppState::new();
        app.set_row_count(2);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.table_state.selected(), Some(1));

        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_scroll_without_rows_selects_nothing() {
        let mut app = AppState::new();
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_key_bindings() {
        let mut app = AppState::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('w'))), KeyAction::ToggleWatering);
        assert_eq!(app.handle_key(key(KeyCode::Char(' '))), KeyAction::ToggleWatering);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_shrinking_rows_clamps_selection() {
        let mut app = AppState::new();
        app.set_row_count(5);
        app.table_state.select(Some(4));
        app.set_row_count(2);
        assert_eq!(app.table_state.selected(), Some(1));
        app.set_row_count(0);
        assert_eq!(app.table_state.selected(), None);
    }
}
