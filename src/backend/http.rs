//! HTTP backend for the vocabulary REST API.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Method;
use serde::Deserialize;

use super::{ApiClient, ApiError, Backend, Definition, Meaning, Phonetic, WordId, WordRecord};
use crate::utils::datetime;

const WORDS_PATH: &str = "/words";
const LOOKUP_PATH: &str = "/lookup";
const TOKEN_PATH: &str = "/token";

/// Backend talking to the vocabulary API over HTTP.
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // Helper: Transform API word payload → domain record
    fn word_to_record(payload: WordPayload) -> Result<WordRecord, ApiError> {
        let created_at = datetime::parse_server_timestamp(&payload.created_at).ok_or_else(|| {
            ApiError::InvalidData(format!(
                "Invalid created_at '{}' for word '{}'",
                payload.created_at, payload.word
            ))
        })?;
        let entry = payload.data.unwrap_or(payload.inline);

        Ok(WordRecord {
            id: payload.id,
            word: payload.word,
            phonetic: non_empty(entry.phonetic),
            phonetics: entry.phonetics.into_iter().map(Self::phonetic_to_domain).collect(),
            meanings: entry.meanings.into_iter().map(Self::meaning_to_domain).collect(),
            created_at,
        })
    }

    fn phonetic_to_domain(phonetic: PhoneticPayload) -> Phonetic {
        Phonetic {
            text: non_empty(phonetic.text),
            audio_url: non_empty(phonetic.audio),
            source_url: non_empty(phonetic.source_url),
            license: phonetic.license.and_then(LicensePayload::into_name),
        }
    }

    fn meaning_to_domain(meaning: MeaningPayload) -> Meaning {
        let mut synonyms = meaning.synonyms;
        let mut antonyms = meaning.antonyms;
        let definitions = meaning
            .definitions
            .into_iter()
            .map(|definition| {
                // dictionaryapi.dev also lists synonyms per definition
                synonyms.extend(definition.synonyms);
                antonyms.extend(definition.antonyms);
                Definition {
                    text: definition.definition,
                    example: non_empty(definition.example),
                    translation: non_empty(definition.translation),
                    example_translation: non_empty(definition.example_translation),
                }
            })
            .collect();
        dedup_preserving_order(&mut synonyms);
        dedup_preserving_order(&mut antonyms);

        Meaning {
            part_of_speech: meaning.part_of_speech,
            definitions,
            synonyms,
            antonyms,
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn fetch_words(&self) -> Result<Vec<WordRecord>, ApiError> {
        let payloads: Vec<WordPayload> = self
            .client
            .send_json(self.client.request(Method::GET, WORDS_PATH))
            .await?;
        info!("Fetched {} saved words", payloads.len());
        payloads.into_iter().map(Self::word_to_record).collect()
    }

    async fn lookup_word(&self, term: &str) -> Result<WordRecord, ApiError> {
        // POST: the backend saves the word as a side effect, so the call is not retry-safe.
        let request = self
            .client
            .request(Method::POST, LOOKUP_PATH)
            .query(&[("word", term)]);
        let payload: WordPayload = self.client.send_json(request).await?;
        debug!("Lookup '{}' resolved to word #{}", term, payload.id);
        Self::word_to_record(payload)
    }

    async fn delete_word(&self, id: WordId) -> Result<(), ApiError> {
        let path = format!("{WORDS_PATH}/{id}");
        self.client.send(self.client.request(Method::DELETE, &path)).await?;
        info!("Deleted word #{id}");
        Ok(())
    }

    async fn request_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = self
            .client
            .request(Method::POST, TOKEN_PATH)
            .form(&[("username", username), ("password", password)]);

        let token: TokenPayload = match self.client.send_json(request).await {
            Ok(token) => token,
            // OAuth2 password flows answer bad credentials with 400
            Err(ApiError::Server { status: 400, detail }) => return Err(ApiError::Auth { detail }),
            Err(e) => return Err(e),
        };

        if token.access_token.trim().is_empty() {
            return Err(ApiError::InvalidData("Token response had an empty access_token".to_string()));
        }
        if let Some(token_type) = token.token_type.as_deref() {
            if !token_type.eq_ignore_ascii_case("bearer") {
                debug!("Unexpected token type '{token_type}', using it as a bearer token");
            }
        }
        Ok(token.access_token)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn dedup_preserving_order(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.to_lowercase()));
}

/// Word as served by the API: dictionary data nested under `data`, or inline.
#[derive(Debug, Deserialize)]
struct WordPayload {
    id: WordId,
    word: String,
    #[serde(default)]
    data: Option<EntryPayload>,
    #[serde(flatten)]
    inline: EntryPayload,
    #[serde(alias = "createdAt")]
    created_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EntryPayload {
    phonetic: Option<String>,
    phonetics: Vec<PhoneticPayload>,
    meanings: Vec<MeaningPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PhoneticPayload {
    text: Option<String>,
    #[serde(alias = "audioUrl", alias = "audio_url")]
    audio: Option<String>,
    #[serde(alias = "source_url")]
    source_url: Option<String>,
    license: Option<LicensePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicensePayload {
    Name(String),
    Object { name: Option<String> },
}

impl LicensePayload {
    fn into_name(self) -> Option<String> {
        match self {
            Self::Name(name) => non_empty(Some(name)),
            Self::Object { name } => non_empty(name),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MeaningPayload {
    #[serde(alias = "part_of_speech")]
    part_of_speech: String,
    definitions: Vec<DefinitionPayload>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DefinitionPayload {
    #[serde(alias = "text")]
    definition: String,
    example: Option<String>,
    translation: Option<String>,
    #[serde(alias = "example_translation")]
    example_translation: Option<String>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}
