//! Vocabulary state: the saved-words list, the word on display, and the
//! operations that change them.
//!
//! [`VocabularyState`] holds the data and applies operation outcomes without
//! doing any I/O, so the UI loop can run requests in the background and feed
//! results back in. [`Vocabulary`] pairs the state with a [`Backend`] and an
//! [`AudioPlayer`] for callers that simply await each operation.
//!
//! # Overlapping searches
//!
//! Every accepted search gets a [`SearchTicket`]. Only the result for the most
//! recently issued ticket is applied; responses to superseded searches are
//! logged and dropped, whatever order they arrive in.

pub mod audio;

use std::sync::Arc;

use log::{debug, info, warn};

use crate::backend::{ApiError, Backend, WordId, WordRecord};
use crate::constants::{ERROR_DELETE_FAILED, ERROR_LOAD_WORDS_FAILED};

pub use audio::{AudioPlayer, CommandAudioPlayer, DisabledAudioPlayer};

/// Generic message for a lookup that failed without a server explanation.
pub fn word_not_found_message(term: &str) -> String {
    format!("Sorry, the word \"{term}\" could not be found.")
}

/// Receipt for an accepted search, needed to apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    term: String,
}

impl SearchTicket {
    /// The trimmed term to look up.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct VocabularyState {
    saved_words: Vec<WordRecord>,
    current_word: Option<WordRecord>,
    search_term: String,
    loading: bool,
    error: Option<String>,
    issued_searches: u64,
    pending_deletes: Vec<WordId>,
    loading_words: bool,
    loaded: bool,
}

impl VocabularyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved words, most recent first.
    pub fn saved_words(&self) -> &[WordRecord] {
        &self.saved_words
    }

    pub fn current_word(&self) -> Option<&WordRecord> {
        self.current_word.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        !self.pending_deletes.is_empty()
    }

    /// Whether a fetch of the saved list is in flight.
    pub fn is_loading_words(&self) -> bool {
        self.loading_words
    }

    /// Whether the saved list has been fetched successfully at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn find(&self, id: WordId) -> Option<&WordRecord> {
        self.saved_words.iter().find(|w| w.id == id)
    }

    pub fn position_of(&self, id: WordId) -> Option<usize> {
        self.saved_words.iter().position(|w| w.id == id)
    }

    pub fn is_current(&self, id: WordId) -> bool {
        self.current_word.as_ref().is_some_and(|w| w.id == id)
    }

    /// Drop everything, e.g. when the user logs out. Searches issued before
    /// the reset are superseded.
    pub fn reset(&mut self) {
        *self = Self {
            issued_searches: self.issued_searches + 1,
            ..Self::default()
        };
    }

    /// Start a search. Returns `None` for blank input, leaving state untouched.
    pub fn begin_search(&mut self, term: &str) -> Option<SearchTicket> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.issued_searches += 1;
        self.search_term = term.to_string();
        self.loading = true;
        self.error = None;
        self.current_word = None;

        Some(SearchTicket {
            seq: self.issued_searches,
            term: trimmed.to_string(),
        })
    }

    /// Apply a lookup result. Returns `false` when the ticket was superseded
    /// and the result was ignored.
    pub fn finish_search(&mut self, ticket: &SearchTicket, result: Result<WordRecord, ApiError>) -> bool {
        if ticket.seq != self.issued_searches {
            debug!(
                "Ignoring stale result for '{}' (search {} of {})",
                ticket.term, ticket.seq, self.issued_searches
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(record) => {
                self.upsert(record.clone());
                self.current_word = Some(record);
            }
            Err(e) => {
                warn!("Lookup for '{}' failed: {e}", ticket.term);
                self.error = Some(e.user_message(&word_not_found_message(&ticket.term)));
                self.current_word = None;
            }
        }
        true
    }

    /// Insert at the head, or replace the entry with the same word in place.
    fn upsert(&mut self, record: WordRecord) {
        match self.saved_words.iter().position(|w| w.matches_word(&record.word)) {
            Some(index) => {
                debug!("Updating saved word '{}' at position {}", record.word, index);
                self.saved_words[index] = record;
            }
            None => {
                info!("Saved new word '{}'", record.word);
                self.saved_words.insert(0, record);
            }
        }
    }

    /// Show a saved word. No network involved.
    pub fn select_word(&mut self, record: WordRecord) {
        self.current_word = Some(record);
        self.error = None;
    }

    /// Mark `id` as being deleted.
    pub fn begin_delete(&mut self, id: WordId) {
        if !self.pending_deletes.contains(&id) {
            self.pending_deletes.push(id);
        }
    }

    pub fn finish_delete(&mut self, id: WordId, result: Result<(), ApiError>) {
        self.pending_deletes.retain(|pending| *pending != id);
        match result {
            Ok(()) => {
                self.saved_words.retain(|w| w.id != id);
                if self.is_current(id) {
                    self.current_word = None;
                    self.search_term.clear();
                }
            }
            Err(e) => {
                warn!("Deleting word #{id} failed: {e}");
                self.error = Some(e.user_message(ERROR_DELETE_FAILED));
            }
        }
    }

    /// Mark the saved list as being fetched.
    pub fn begin_load(&mut self) {
        self.loading_words = true;
    }

    /// Apply the result of fetching the saved list. On failure the list is left as it was.
    pub fn finish_load(&mut self, result: Result<Vec<WordRecord>, ApiError>) {
        self.loading_words = false;
        match result {
            Ok(words) => {
                self.saved_words = words;
                self.loaded = true;
            }
            Err(e) => {
                warn!("Loading saved words failed: {e}");
                self.error = Some(e.user_message(ERROR_LOAD_WORDS_FAILED));
            }
        }
    }
}

/// Vocabulary state wired to a backend and an audio player.
pub struct Vocabulary {
    backend: Arc<dyn Backend>,
    audio: Arc<dyn AudioPlayer>,
    state: VocabularyState,
}

impl Vocabulary {
    pub fn new(backend: Arc<dyn Backend>, audio: Arc<dyn AudioPlayer>) -> Self {
        Self {
            backend,
            audio,
            state: VocabularyState::new(),
        }
    }

    pub fn state(&self) -> &VocabularyState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut VocabularyState {
        &mut self.state
    }

    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    /// Fetch the saved-words list (done once when the main view opens).
    pub async fn load_saved_words(&mut self) -> Result<(), ApiError> {
        self.state.begin_load();
        let result = self.backend.fetch_words().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.state.finish_load(result);
        outcome
    }

    /// Look up `term` and save it. Blank input is ignored without a request.
    pub async fn search(&mut self, term: &str) -> Result<(), ApiError> {
        let Some(ticket) = self.state.begin_search(term) else {
            return Ok(());
        };

        let result = self.backend.lookup_word(ticket.term()).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.state.finish_search(&ticket, result);
        outcome
    }

    pub fn select_word(&mut self, record: WordRecord) {
        self.state.select_word(record);
    }

    pub async fn delete_word(&mut self, id: WordId) -> Result<(), ApiError> {
        self.state.begin_delete(id);
        let result = self.backend.delete_word(id).await;
        let outcome = result.clone();
        self.state.finish_delete(id, result);
        outcome
    }

    /// Start playing `url` in the background. Returns whether playback was started.
    pub fn play_audio(&self, url: Option<&str>) -> bool {
        match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => audio::play_in_background(Arc::clone(&self.audio), url.to_string()).is_some(),
            None => false,
        }
    }
}
