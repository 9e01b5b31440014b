//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ThemeName;
use crate::constants::{APP_NAME, STATUS_DELETING, STATUS_SEARCHING};
use crate::ui::core::{Focus, ViewContext};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text and whether it reports a problem
    pub fn status_text(view: &ViewContext, focus: Focus) -> (String, bool) {
        let vocabulary = view.vocabulary;
        if vocabulary.is_deleting() {
            (STATUS_DELETING.to_string(), false)
        } else if vocabulary.is_loading() {
            (STATUS_SEARCHING.to_string(), false)
        } else if let Some(error) = vocabulary.error() {
            (format!("⚠ {error}  (x: dismiss)"), true)
        } else {
            let hints = match focus {
                Focus::Search => "Enter: look up • Esc: saved words • Ctrl+C: quit",
                Focus::SavedWords => "/: search • Enter: show • d: delete • p: play • t: theme • v: translations • ?: help • q: quit",
            };
            (hints.to_string(), false)
        }
    }

    pub fn render(f: &mut Frame, area: Rect, view: &ViewContext, focus: Focus) {
        let (text, is_error) = Self::status_text(view, focus);
        let style = if is_error {
            view.theme.error_text()
        } else {
            Style::default().fg(view.theme.muted)
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style.bg(view.theme.surface));

        f.render_widget(status_bar, area);
    }
}

/// One-line header with the app title and the active theme
pub struct TitleBar;

impl TitleBar {
    pub fn theme_label(name: ThemeName) -> &'static str {
        match name {
            ThemeName::Dark => "☾ dark",
            ThemeName::Light => "☀ light",
        }
    }

    pub fn render(f: &mut Frame, area: Rect, view: &ViewContext) {
        let theme = view.theme;
        let label = Self::theme_label(theme.name);
        let padding = (area.width as usize).saturating_sub(APP_NAME.chars().count() + label.chars().count() + 2);

        let line = Line::from(vec![
            Span::styled(format!(" {APP_NAME}"), Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::styled(format!("{label} "), Style::default().fg(theme.muted)),
        ]);

        f.render_widget(Paragraph::new(line).style(Style::default().bg(theme.surface)), area);
    }
}
