//! UI components

pub mod common;
pub mod dialog_component;
pub mod login_component;
pub mod saved_words_component;
pub mod scrollbar_helper;
pub mod search_component;
pub mod status_bar;
pub mod word_details_component;

pub use dialog_component::DialogComponent;
pub use login_component::LoginComponent;
pub use saved_words_component::SavedWordsComponent;
pub use search_component::SearchComponent;
pub use status_bar::{StatusBar, TitleBar};
pub use word_details_component::WordDetailsComponent;
