//! Backend abstraction layer for the vocabulary service.
//!
//! This module defines the interface the rest of the application uses to talk to
//! the remote vocabulary API, along with the domain types for dictionary entries
//! and the error taxonomy shared by every remote call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod client;
pub mod http;

pub use client::ApiClient;
pub use http::HttpBackend;

/// Identifier assigned to a saved word by the backend.
pub type WordId = i64;

/// Error types for backend operations.
///
/// Variants that originate from an HTTP response carry the server-provided
/// `detail` text when the response body had one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {}", .detail.as_deref().unwrap_or("no dictionary entry"))]
    NotFound { detail: Option<String> },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication failed: {}", .detail.as_deref().unwrap_or("credentials rejected"))]
    Auth { detail: Option<String> },

    #[error("Server error ({status}): {}", .detail.as_deref().unwrap_or("no details"))]
    Server { status: u16, detail: Option<String> },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ApiError {
    /// Build an error from a non-success HTTP status and an optional detail message.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Auth { detail },
            404 => Self::NotFound { detail },
            _ => Self::Server { status, detail },
        }
    }

    /// Text meant for the user: server detail for remote errors, the message itself
    /// for locally rejected input.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NotFound { detail } | Self::Auth { detail } | Self::Server { detail, .. } => detail.as_deref(),
            Self::Validation(message) => Some(message.as_str()),
            Self::Network(_) | Self::InvalidData(_) => None,
        }
    }

    /// User-facing message, preferring [`ApiError::detail`] over `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Whether the backend rejected the bearer token or credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

/// One pronunciation variant of a word.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio_url: Option<String>,
    pub source_url: Option<String>,
    pub license: Option<String>,
}

/// A single definition inside a meaning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,
    pub example: Option<String>,
    /// Vietnamese translation of the definition, when the backend provides one.
    pub translation: Option<String>,
    pub example_translation: Option<String>,
}

/// Definitions grouped by part of speech.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Full dictionary entry for one looked-up or saved word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: WordId,
    pub word: String,
    /// Top-level phonetic text some entries carry in addition to `phonetics`.
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    pub created_at: DateTime<Utc>,
}

impl WordRecord {
    /// Case-insensitive comparison on the natural key.
    pub fn matches_word(&self, word: &str) -> bool {
        self.word.to_lowercase() == word.to_lowercase()
    }

    /// First pronunciation that has audio, falling back to the first one with text.
    pub fn primary_phonetic(&self) -> Option<&Phonetic> {
        self.phonetics
            .iter()
            .find(|p| p.audio_url.is_some())
            .or_else(|| self.phonetics.iter().find(|p| p.text.is_some()))
    }

    /// Phonetic text to display next to the word.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.primary_phonetic()
            .and_then(|p| p.text.as_deref())
            .or_else(|| self.phonetics.iter().find_map(|p| p.text.as_deref()))
            .or(self.phonetic.as_deref())
    }

    /// Audio URL for the pronunciation, if any variant has one.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics.iter().find_map(|p| p.audio_url.as_deref())
    }
}

/// Backend trait describing every remote operation the client needs.
///
/// Implementations surface failures directly; no retry or backoff happens at
/// this layer.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Base address requests are sent to, for display and logging.
    fn base_url(&self) -> &str;

    /// Fetch the full saved-words list, most recent first.
    async fn fetch_words(&self) -> Result<Vec<WordRecord>, ApiError>;

    /// Look up a word. The backend saves it (or refreshes the existing entry).
    async fn lookup_word(&self, term: &str) -> Result<WordRecord, ApiError>;

    async fn delete_word(&self, id: WordId) -> Result<(), ApiError>;

    /// Exchange credentials for a bearer token.
    async fn request_token(&self, username: &str, password: &str) -> Result<String, ApiError>;
}
