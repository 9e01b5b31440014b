use crate::backend::WordRecord;
use crate::constants::{PLACEHOLDER_NO_SAVED_WORDS, STATUS_LOADING_WORDS};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    Component, ViewContext,
};
use crate::utils::datetime::format_saved_ago;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Rows each saved word occupies in the list
const ITEM_HEIGHT: usize = 2;

pub struct SavedWordsComponent {
    pub words: Vec<WordRecord>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    scrollbar: ScrollbarHelper,
}

impl Default for SavedWordsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SavedWordsComponent {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the list, keeping the cursor on the same word when it survives
    pub fn update_data(&mut self, words: &[WordRecord]) {
        let selected_id = self.selected().map(|w| w.id);
        self.words = words.to_vec();

        if let Some(index) = selected_id.and_then(|id| self.words.iter().position(|w| w.id == id)) {
            self.selected_index = index;
        }
        self.update_list_state();
    }

    pub fn selected(&self) -> Option<&WordRecord> {
        self.words.get(self.selected_index)
    }

    /// Move the cursor to `id` if it is in the list
    pub fn select_id(&mut self, id: i64) {
        if let Some(index) = self.words.iter().position(|w| w.id == id) {
            self.selected_index = index;
            self.update_list_state();
        }
    }

    fn update_list_state(&mut self) {
        if self.words.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(self.words.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.words.is_empty() {
            return;
        }
        let last = self.words.len() - 1;
        self.selected_index = self.selected_index.saturating_add_signed(delta).min(last);
        self.update_list_state();
    }

    fn create_items(&self, view: &ViewContext) -> Vec<ListItem<'static>> {
        let theme = view.theme;
        let now = Utc::now();

        self.words
            .iter()
            .map(|word| {
                let active = view.vocabulary.is_current(word.id);
                let marker = if active { "▶ " } else { "  " };
                let word_style = if active {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD)
                };

                let mut headline = vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(word.word.clone(), word_style),
                ];
                if let Some(phonetic) = word.phonetic_text() {
                    headline.push(Span::raw(" "));
                    headline.push(Span::styled(phonetic.to_string(), theme.muted_text()));
                }

                let saved = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format_saved_ago(word.created_at, now), theme.muted_text()),
                ]);

                ListItem::new(vec![Line::from(headline), saved])
            })
            .collect()
    }
}

impl Component for SavedWordsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.words.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            KeyCode::Enter => self.selected().map_or(Action::None, |w| Action::SelectWord(w.id)),
            KeyCode::Char('d') | KeyCode::Delete => self.selected().map_or(Action::None, |w| {
                Action::ShowDialog(DialogType::DeleteConfirmation {
                    id: w.id,
                    word: w.word.clone(),
                })
            }),
            KeyCode::Char('p') => self
                .selected()
                .map_or(Action::None, |w| Action::PlayAudio(w.audio_url().map(str::to_string))),
            KeyCode::Char('/') | KeyCode::Tab => Action::Focus(Focus::Search),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, view: &ViewContext) {
        let theme = view.theme;
        let title = format!(" Saved Words ({}) ", self.words.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(theme.title())
            .border_style(theme.border(self.focused))
            .style(theme.text());

        if self.words.is_empty() {
            let placeholder = if view.vocabulary.is_loading_words() {
                STATUS_LOADING_WORDS
            } else {
                PLACEHOLDER_NO_SAVED_WORDS
            };
            let paragraph = Paragraph::new(placeholder)
                .block(block)
                .style(theme.muted_text())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, rect);
            return;
        }

        let total_rows = self.words.len() * ITEM_HEIGHT;
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);

        let highlight = if self.focused {
            theme.selected()
        } else {
            Style::default().bg(theme.surface)
        };
        let list = List::new(self.create_items(view))
            .block(block)
            .highlight_style(highlight);
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let viewport = rect.height.saturating_sub(2) as usize;
        self.scrollbar
            .update_state(total_rows, self.selected_index * ITEM_HEIGHT, Some(viewport));
        self.scrollbar.render(f, scrollbar_area, theme.muted_text());
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
