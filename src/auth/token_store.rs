//! Durable storage for the bearer token.
//!
//! The token is kept in `<data_dir>/hazy/session.json` with restricted
//! permissions (0600 on unix) so a login survives restarts until an explicit
//! logout. Tokens are never logged.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR_NAME, SESSION_FILE_NAME};

/// Where a session token is persisted between runs.
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when nothing has been saved.
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    /// Removes the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Token store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location inside the platform data directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {}", self.path.display()))?;
        let stored: StoredSession = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session file {}", self.path.display()))?;

        let token = stored.token.trim().to_string();
        Ok(if token.is_empty() { None } else { Some(token) })
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let stored = StoredSession {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&stored).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write {}", self.path.display()))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove session file {}", self.path.display())),
        }
    }
}

/// In-memory token store, for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a token, as if saved by an earlier run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self.token.lock().map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self.token.lock().map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.token.lock().map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
