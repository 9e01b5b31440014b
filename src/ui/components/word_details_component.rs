use crate::backend::{Meaning, WordRecord};
use crate::constants::{PLACEHOLDER_NO_WORD, PLACEHOLDER_NO_WORD_HINT, STATUS_SEARCHING};
use crate::ui::core::{actions::Action, Component, ViewContext};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Dictionary entry for the word on display.
#[derive(Debug, Default)]
pub struct WordDetailsComponent {
    pub scroll_offset: u16,
}

impl WordDetailsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Furthest scroll offset that still fills a `width` x `height` pane,
    /// counting rows after word wrapping.
    pub fn max_scroll(lines: &[Line<'_>], width: u16, height: u16) -> u16 {
        let rows = Paragraph::new(lines.to_vec()).wrap(Wrap { trim: false }).line_count(width);
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(height)
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Lines describing `word`, limited to `max_definitions` per part of speech
    pub fn entry_lines(word: &WordRecord, theme: &Theme, show_translations: bool, max_definitions: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let mut headline = vec![Span::styled(
            word.word.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )];
        if let Some(phonetic) = word.phonetic_text() {
            headline.push(Span::raw("  "));
            headline.push(Span::styled(phonetic.to_string(), Style::default().fg(theme.secondary)));
        }
        if word.audio_url().is_some() {
            headline.push(Span::styled("  🔊 p to play", theme.muted_text()));
        }
        lines.push(Line::from(headline));

        for meaning in &word.meanings {
            lines.push(Line::default());
            lines.extend(Self::meaning_lines(meaning, theme, show_translations, max_definitions));
        }

        lines
    }

    fn meaning_lines(meaning: &Meaning, theme: &Theme, show_translations: bool, max_definitions: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            meaning.part_of_speech.clone(),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::ITALIC | Modifier::BOLD),
        ))];

        for (index, definition) in meaning.definitions.iter().take(max_definitions).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", index + 1), theme.muted_text()),
                Span::styled(definition.text.clone(), Style::default().fg(theme.foreground)),
            ]));

            if show_translations {
                if let Some(translation) = &definition.translation {
                    lines.push(Line::from(Span::styled(
                        format!("     {translation}"),
                        Style::default().fg(theme.success),
                    )));
                }
            }

            if let Some(example) = &definition.example {
                lines.push(Line::from(Span::styled(
                    format!("     \"{example}\""),
                    theme.muted_text().add_modifier(Modifier::ITALIC),
                )));
                if show_translations {
                    if let Some(translation) = &definition.example_translation {
                        lines.push(Line::from(Span::styled(
                            format!("     \"{translation}\""),
                            Style::default().fg(theme.success).add_modifier(Modifier::ITALIC),
                        )));
                    }
                }
            }
        }

        let hidden = meaning.definitions.len().saturating_sub(max_definitions);
        if hidden > 0 {
            lines.push(Line::from(Span::styled(
                format!("     +{hidden} more"),
                theme.muted_text(),
            )));
        }

        for (label, words) in [("Synonyms", &meaning.synonyms), ("Antonyms", &meaning.antonyms)] {
            if !words.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {label}: "), Style::default().fg(theme.secondary)),
                    Span::styled(words.join(", "), Style::default().fg(theme.foreground)),
                ]));
            }
        }

        lines
    }
}

impl Component for WordDetailsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(5),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(5),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &ViewContext) {
        let theme = view.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Definition ")
            .title_style(theme.title())
            .border_style(theme.border(false))
            .style(theme.text());

        let vocabulary = view.vocabulary;
        let paragraph = if vocabulary.is_loading() {
            Paragraph::new(STATUS_SEARCHING)
                .style(theme.muted_text())
                .alignment(Alignment::Center)
        } else if let Some(word) = vocabulary.current_word() {
            let lines = Self::entry_lines(word, theme, view.show_translations, view.max_definitions);
            let inner = block.inner(rect);
            let max_scroll = Self::max_scroll(&lines, inner.width, inner.height);
            self.scroll_offset = self.scroll_offset.min(max_scroll);
            Paragraph::new(lines).scroll((self.scroll_offset, 0))
        } else if let Some(error) = vocabulary.error() {
            Paragraph::new(error.to_string())
                .style(theme.error_text())
                .alignment(Alignment::Center)
        } else {
            Paragraph::new(vec![
                Line::from(PLACEHOLDER_NO_WORD),
                Line::from(Span::styled(PLACEHOLDER_NO_WORD_HINT, theme.muted_text())),
            ])
            .alignment(Alignment::Center)
        };

        f.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), rect);
    }
}
