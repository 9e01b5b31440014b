use crate::backend::{ApiError, WordId, WordRecord};
use crate::vocabulary::SearchTicket;

/// Which part of the main screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    SavedWords,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Session
    SubmitLogin {
        username: String,
        password: String,
    },
    LoginCompleted(Result<String, ApiError>),
    Logout,

    // Vocabulary operations
    Search(String),
    SearchCompleted {
        ticket: SearchTicket,
        result: Result<WordRecord, ApiError>,
    },
    SelectWord(WordId),
    DeleteWord(WordId),
    DeleteCompleted {
        id: WordId,
        result: Result<(), ApiError>,
    },
    LoadSavedWords,
    SavedWordsLoaded(Result<Vec<WordRecord>, ApiError>),
    PlayAudio(Option<String>),

    // UI operations
    Focus(Focus),
    ToggleTheme,
    ToggleTranslations,
    DismissError,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation { id: WordId, word: String },
    Help,
    Logs,
}
