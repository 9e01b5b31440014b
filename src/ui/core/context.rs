use crate::logger::Logger;
use crate::ui::theme::Theme;
use crate::vocabulary::VocabularyState;

/// Read-only view of application state handed to components while rendering.
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    pub vocabulary: &'a VocabularyState,
    pub logger: &'a Logger,
    pub show_translations: bool,
    pub max_definitions: usize,
    pub auth_error: Option<&'a str>,
    pub authenticating: bool,
}
