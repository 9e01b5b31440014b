use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, color: Color, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
        .style(Style::default().fg(theme.foreground).bg(theme.background))
}

/// Creates an input field block, with a cursor when focused
pub fn create_input_paragraph<'a>(value: &str, field_title: &str, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let display = if focused { format!("{value}█") } else { value.to_string() };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(if focused { theme.title() } else { theme.muted_text() })
        .border_style(theme.border(focused));

    Paragraph::new(display)
        .block(input_block)
        .style(Style::default().fg(theme.foreground))
}

/// Instruction shortcut definition: (key, description)
pub type InstructionShortcut = (&'static str, &'static str);

/// Creates a centered line of key hints
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (index, (key, desc)) in instructions.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", theme.muted_text()));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(*desc, theme.muted_text()));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::InstructionShortcut;

    pub const ESC_CANCEL: InstructionShortcut = ("Esc", " Cancel");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", " Confirm");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", " Log in");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", " Next field");
    pub const SCROLL: InstructionShortcut = ("j/k", " Scroll");
}
