use crate::ui::components::common;
use crate::ui::core::{
    actions::{Action, Focus},
    Component, ViewContext,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Single-line input for the word to look up.
#[derive(Debug, Default)]
pub struct SearchComponent {
    pub query: String,
    pub focused: bool,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            focused: true,
        }
    }

    /// Mirror the term held by the vocabulary state
    pub fn sync_query(&mut self, term: &str) {
        if self.query != term {
            self.query = term.to_string();
        }
    }
}

impl Component for SearchComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Search(self.query.clone()),
            KeyCode::Esc | KeyCode::Tab => Action::Focus(Focus::SavedWords),
            KeyCode::Backspace => {
                self.query.pop();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.clear();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &ViewContext) {
        let title = if self.focused { "Search (Enter to look up)" } else { "Search (/)" };
        let input = common::create_input_paragraph(&self.query, title, self.focused, view.theme);
        f.render_widget(input, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
