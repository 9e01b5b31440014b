//! Modal dialogs drawn over the main screen.
//!
//! Only one dialog is open at a time. While open it receives every key press;
//! closing it hands input back to the main screen.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::components::common::{self, shortcuts};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, ViewContext,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            ("/", "Focus the search box"),
            ("Enter", "Look up and save the typed word"),
            ("Esc", "Leave the search box"),
        ],
    ),
    (
        "Saved words",
        &[
            ("j / ↓", "Next word"),
            ("k / ↑", "Previous word"),
            ("Enter", "Show the selected word"),
            ("d", "Delete the selected word"),
            ("p", "Play pronunciation"),
            ("PgUp / PgDn", "Scroll the definition"),
            ("r", "Reload saved words"),
        ],
    ),
    (
        "General",
        &[
            ("t", "Toggle dark/light theme"),
            ("v", "Toggle translations"),
            ("x", "Dismiss the error message"),
            ("G", "Show logs"),
            ("L", "Log out"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

#[derive(Default)]
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    scrollbar: ScrollbarHelper,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn help_lines(view: &ViewContext) -> Vec<Line<'static>> {
        let theme = view.theme;
        let mut lines = Vec::new();
        for (section, keys) in HELP_SECTIONS {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*section, theme.title())));
            for (key, description) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {key:<12}"),
                        Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(theme.foreground)),
                ]));
            }
        }
        lines
    }

    fn log_lines(view: &ViewContext) -> Vec<Line<'static>> {
        let logs = view.logger.get_logs();
        if logs.is_empty() {
            return vec![Line::from(Span::styled("No log entries yet.", view.theme.muted_text()))];
        }
        logs.into_iter().map(Line::from).collect()
    }

    fn render_scrollable(&mut self, f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, view: &ViewContext) {
        let theme = view.theme;
        f.render_widget(Clear, area);

        let block = common::create_dialog_block(title, theme.accent, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let visible = chunks[0].height as usize;
        let max_scroll = lines.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let total = lines.len();
        let paragraph = Paragraph::new(lines)
            .scroll((self.scroll_offset as u16, 0))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, chunks[0]);

        if ScrollbarHelper::needs_scrollbar(total, visible) {
            self.scrollbar.update_state(total, self.scroll_offset, Some(visible));
            let bar = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: chunks[0].y,
                width: 1,
                height: chunks[0].height,
            };
            self.scrollbar.render(f, Some(bar), theme.muted_text());
        }

        let instructions = common::create_instructions_paragraph(&[shortcuts::SCROLL, ("Esc", " Close")], theme);
        f.render_widget(instructions, chunks[1]);
    }

    fn render_delete_confirmation(f: &mut Frame, area: Rect, word: &str, view: &ViewContext) {
        let theme = view.theme;
        let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(" ⚠ Confirm Delete ", theme.error, theme);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(Line::from(vec![
            Span::raw("Remove "),
            Span::styled(format!("\"{word}\""), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" from your saved words?"),
        ]))
        .style(Style::default().fg(theme.foreground))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[0]);

        let instructions =
            common::create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::ESC_CANCEL], theme);
        f.render_widget(instructions, chunks[1]);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { id, .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::DeleteWord(*id),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Help) | Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => Action::HideDialog,
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::PageDown => {
                    self.scroll_offset = self.scroll_offset.saturating_add(10);
                    Action::None
                }
                KeyCode::PageUp => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(10);
                    Action::None
                }
                KeyCode::Home => {
                    self.scroll_offset = 0;
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            Action::DeleteWord(id) => {
                // Confirmation handled; the app performs the delete
                self.dialog_type = None;
                Action::DeleteWord(id)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &ViewContext) {
        match self.dialog_type.clone() {
            Some(DialogType::DeleteConfirmation { word, .. }) => Self::render_delete_confirmation(f, rect, &word, view),
            Some(DialogType::Help) => {
                let (width, height) = LayoutManager::help_panel_dimensions(rect.width, rect.height);
                let area = LayoutManager::centered_rect(width, height, rect);
                self.render_scrollable(f, area, " ❓ Help ", Self::help_lines(view), view);
            }
            Some(DialogType::Logs) => {
                let area = LayoutManager::centered_rect(85, 80, rect);
                self.render_scrollable(f, area, DIALOG_TITLE_LOGS, Self::log_lines(view), view);
            }
            None => {}
        }
    }
}
