#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use hazy::backend::{ApiError, Backend, Definition, Meaning, Phonetic, WordId, WordRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// Build a saved word with one noun meaning.
pub fn word(id: WordId, text: &str) -> WordRecord {
    WordRecord {
        id,
        word: text.to_string(),
        phonetic: Some(format!("/{text}/")),
        phonetics: vec![Phonetic {
            text: Some(format!("/{text}/")),
            audio_url: Some(format!("https://audio.example/{text}.mp3")),
            source_url: None,
            license: None,
        }],
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: vec![Definition {
                text: format!("Meaning of {text}"),
                example: Some(format!("Use {text} in a sentence.")),
                translation: None,
                example_translation: None,
            }],
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }],
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap() + Duration::minutes(id),
    }
}

/// In-memory backend with scripted responses.
#[derive(Default)]
pub struct FakeBackend {
    words: Mutex<Vec<WordRecord>>,
    lookups: Mutex<HashMap<String, Result<WordRecord, ApiError>>>,
    fetch_error: Mutex<Option<ApiError>>,
    delete_error: Mutex<Option<ApiError>>,
    token: Mutex<Option<Result<String, ApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: Vec<WordRecord>) -> Self {
        let backend = Self::default();
        *backend.words.lock().unwrap() = words;
        backend
    }

    /// Answer lookups of `term` (any case) with `result`
    pub fn on_lookup(&self, term: &str, result: Result<WordRecord, ApiError>) {
        self.lookups.lock().unwrap().insert(term.to_lowercase(), result);
    }

    pub fn fail_fetch(&self, error: ApiError) {
        *self.fetch_error.lock().unwrap() = Some(error);
    }

    pub fn fail_delete(&self, error: ApiError) {
        *self.delete_error.lock().unwrap() = Some(error);
    }

    pub fn on_token(&self, result: Result<String, ApiError>) {
        *self.token.lock().unwrap() = Some(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn base_url(&self) -> &str {
        "http://fake.test/api"
    }

    async fn fetch_words(&self) -> Result<Vec<WordRecord>, ApiError> {
        self.record("fetch".to_string());
        if let Some(error) = self.fetch_error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.words.lock().unwrap().clone())
    }

    async fn lookup_word(&self, term: &str) -> Result<WordRecord, ApiError> {
        self.record(format!("lookup:{term}"));
        self.lookups
            .lock()
            .unwrap()
            .get(&term.to_lowercase())
            .cloned()
            .unwrap_or(Err(ApiError::NotFound { detail: None }))
    }

    async fn delete_word(&self, id: WordId) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"));
        if let Some(error) = self.delete_error.lock().unwrap().clone() {
            return Err(error);
        }
        let mut words = self.words.lock().unwrap();
        let before = words.len();
        words.retain(|w| w.id != id);
        if words.len() == before {
            return Err(ApiError::NotFound {
                detail: Some("Word not found".to_string()),
            });
        }
        Ok(())
    }

    async fn request_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.record(format!("token:{username}"));
        self.token
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| {
                if username == "alice" && password == "secret" {
                    Ok("token-alice".to_string())
                } else {
                    Err(ApiError::Auth {
                        detail: Some("Incorrect username or password".to_string()),
                    })
                }
            })
    }
}
