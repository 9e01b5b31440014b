//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

pub const APP_NAME: &str = "Hazy English";
pub const APP_DIR_NAME: &str = "hazy";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "hazy.toml";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const LOG_FILE_NAME: &str = "hazy.log";

// API defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// Error Messages
pub const ERROR_LOAD_WORDS_FAILED: &str = "Failed to load saved words. Please try again later.";
pub const ERROR_DELETE_FAILED: &str = "Failed to delete the word.";
pub const ERROR_LOGIN_FAILED: &str = "An error occurred during login";
pub const ERROR_EMPTY_CREDENTIALS: &str = "Please enter both username and password";
pub const ERROR_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOGGED_OUT: &str = "✅ Logged out";
pub const PLACEHOLDER_NO_WORD: &str = "Search for a word to see its details.";
pub const PLACEHOLDER_NO_WORD_HINT: &str = "Or select a word from your saved list.";
pub const PLACEHOLDER_NO_SAVED_WORDS: &str = "No saved words yet. Search for a word to add it.";
pub const STATUS_SEARCHING: &str = "🔎 Searching...";
pub const STATUS_LOADING_WORDS: &str = "🔄 Loading saved words...";
pub const STATUS_DELETING: &str = "🗑  Deleting word...";
pub const STATUS_LOGGING_IN: &str = "🔐 Logging in...";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Vocabulary display
/// Definitions shown per meaning unless configured otherwise
pub const DEFAULT_MAX_DEFINITIONS: usize = 3;
pub const MAX_DEFINITIONS_LIMIT: usize = 20;

// Logging
/// Entries kept in the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 1000;

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 20;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 60;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 34;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
