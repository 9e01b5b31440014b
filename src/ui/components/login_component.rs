use crate::constants::{APP_NAME, STATUS_LOGGING_IN};
use crate::ui::components::common::{self, shortcuts};
use crate::ui::core::{actions::Action, Component, ViewContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Username/password form shown while no session exists.
#[derive(Debug, Default)]
pub struct LoginComponent {
    pub username: String,
    pub password: String,
    pub field: LoginField,
}

impl LoginComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the typed password, keeping the username for another attempt
    pub fn clear_password(&mut self) {
        self.password.clear();
        self.field = LoginField::Password;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.field = self.field.next();
                Action::None
            }
            KeyCode::Enter => {
                if self.field == LoginField::Username && self.password.is_empty() {
                    self.field = LoginField::Password;
                    return Action::None;
                }
                Action::SubmitLogin {
                    username: self.username.clone(),
                    password: self.password.clone(),
                }
            }
            KeyCode::Backspace => {
                self.active_buffer().pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.active_buffer().push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &ViewContext) {
        let theme = view.theme;
        let area = LayoutManager::centered_rect_lines(50, 13, rect);
        f.render_widget(Clear, area);

        let title = format!(" {APP_NAME} ");
        let block = common::create_dialog_block(&title, theme.accent, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let heading = Paragraph::new("Log in to see your saved words")
            .style(theme.muted_text())
            .alignment(Alignment::Center);
        f.render_widget(heading, chunks[0]);

        let username = common::create_input_paragraph(
            &self.username,
            "Username",
            self.field == LoginField::Username,
            theme,
        );
        f.render_widget(username, chunks[1]);

        let masked = "•".repeat(self.password.chars().count());
        let password = common::create_input_paragraph(&masked, "Password", self.field == LoginField::Password, theme);
        f.render_widget(password, chunks[2]);

        let status = if view.authenticating {
            Paragraph::new(Line::from(STATUS_LOGGING_IN)).style(theme.muted_text())
        } else if let Some(error) = view.auth_error {
            Paragraph::new(Line::from(error.to_string())).style(theme.error_text())
        } else {
            Paragraph::new("")
        };
        f.render_widget(status.alignment(Alignment::Center).wrap(Wrap { trim: true }), chunks[3]);

        let instructions = common::create_instructions_paragraph(
            &[shortcuts::TAB_NEXT, shortcuts::ENTER_SUBMIT, ("Esc", " Quit")],
            theme,
        );
        f.render_widget(instructions, chunks[4]);
    }
}
