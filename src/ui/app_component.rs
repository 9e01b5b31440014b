use crate::auth::AuthService;
use crate::backend::ApiError;
use crate::config::UiConfig;
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, LoginComponent, SavedWordsComponent, SearchComponent, StatusBar, TitleBar, WordDetailsComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component, ViewContext,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crate::vocabulary::Vocabulary;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{layout::Rect, widgets::Block, Frame};
use tokio::sync::mpsc;

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

pub struct AppComponent {
    // Component composition
    login: LoginComponent,
    search: SearchComponent,
    saved_words: SavedWordsComponent,
    details: WordDetailsComponent,
    dialog: DialogComponent,

    // Services
    auth: AuthService,
    vocabulary: Vocabulary,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    theme: Theme,
    show_translations: bool,
    max_definitions: usize,
    sidebar_width: u16,
    screen: Screen,
    focus: Focus,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ui: &UiConfig, auth: AuthService, vocabulary: Vocabulary, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let screen = if auth.is_authenticated() {
            Screen::Main
        } else {
            Screen::Login
        };

        Self {
            login: LoginComponent::new(),
            search: SearchComponent::new(),
            saved_words: SavedWordsComponent::new(),
            details: WordDetailsComponent::new(),
            dialog: DialogComponent::new(),
            auth,
            vocabulary,
            task_manager,
            background_action_rx,
            logger,
            theme: Theme::from_name(ui.theme),
            show_translations: ui.show_translations,
            max_definitions: ui.max_definitions,
            sidebar_width: ui.sidebar_width,
            screen,
            focus: Focus::Search,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_translations(&self) -> bool {
        self.show_translations
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Fetch the saved list when starting on the main screen
    pub fn start(&mut self) {
        if self.screen == Screen::Main {
            self.enter_main_screen();
        }
    }

    fn enter_main_screen(&mut self) {
        info!("Opening vocabulary for the current session");
        self.screen = Screen::Main;
        self.set_focus(Focus::Search);
        self.load_saved_words();
    }

    fn load_saved_words(&mut self) {
        self.vocabulary.state_mut().begin_load();
        self.task_manager.spawn_load(self.vocabulary.backend());
    }

    fn enter_login_screen(&mut self) {
        self.task_manager.cancel_all_tasks();
        self.vocabulary.state_mut().reset();
        self.dialog.update(Action::HideDialog);
        self.login.reset();
        self.search.sync_query("");
        self.details.reset_scroll();
        self.saved_words.update_data(&[]);
        self.screen = Screen::Login;
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Search => {
                self.saved_words.on_blur();
                self.search.on_focus();
            }
            Focus::SavedWords => {
                self.search.on_blur();
                self.saved_words.on_focus();
            }
        }
    }

    /// Drop the session after the backend rejected its token
    fn expire_session(&mut self, error: &ApiError) {
        warn!("Backend rejected the session: {error}");
        self.auth.invalidate();
        self.enter_login_screen();
    }

    /// Returns true when `result` means the session is gone and was handled
    fn check_session<T>(&mut self, result: &Result<T, ApiError>) -> bool {
        match result {
            Err(e) if e.is_unauthorized() => {
                self.expire_session(e);
                true
            }
            _ => false,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('v') => Action::ToggleTranslations,
            KeyCode::Char('r') => Action::LoadSavedWords,
            KeyCode::Char('L') => Action::Logout,
            KeyCode::Char('x') | KeyCode::Esc => Action::DismissError,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.screen == Screen::Login {
            return self.login.handle_key_events(key);
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.focus == Focus::Search {
            return self.search.handle_key_events(key);
        }

        let action = self.saved_words.handle_key_events(key);
        if !matches!(action, Action::None) {
            return action;
        }

        if matches!(key.code, KeyCode::PageUp | KeyCode::PageDown) {
            return self.details.handle_key_events(key);
        }

        self.handle_global_key(key)
    }

    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Run an action through the dialog and then the app
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.handle_app_action(action)
    }

    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("Background: received {action:?}");
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Wait for the next background result
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::SubmitLogin { username, password } => {
                if self.auth.is_authenticating() {
                    debug!("Login already in progress");
                } else if self.auth.begin_login(&username, &password).is_ok() {
                    self.task_manager.spawn_login(self.auth.backend(), username, password);
                }
            }
            Action::LoginCompleted(result) => match self.auth.finish_login(result) {
                Ok(()) => {
                    self.login.reset();
                    self.vocabulary.state_mut().reset();
                    self.enter_main_screen();
                }
                Err(_) => self.login.clear_password(),
            },
            Action::Logout => {
                self.auth.logout();
                self.enter_login_screen();
            }
            Action::Search(term) => {
                if let Some(ticket) = self.vocabulary.state_mut().begin_search(&term) {
                    self.details.reset_scroll();
                    self.task_manager.spawn_search(self.vocabulary.backend(), ticket);
                }
            }
            Action::SearchCompleted { ticket, result } => {
                if self.check_session(&result) {
                    return Action::None;
                }
                let found = result.as_ref().ok().map(|w| w.id);
                let applied = self.vocabulary.state_mut().finish_search(&ticket, result);
                self.saved_words.update_data(self.vocabulary.state().saved_words());
                if let (true, Some(id)) = (applied, found) {
                    self.saved_words.select_id(id);
                }
            }
            Action::SelectWord(id) => {
                if let Some(record) = self.vocabulary.state().find(id).cloned() {
                    self.details.reset_scroll();
                    self.vocabulary.select_word(record);
                }
            }
            Action::DeleteWord(id) => {
                self.vocabulary.state_mut().begin_delete(id);
                self.task_manager.spawn_delete(self.vocabulary.backend(), id);
            }
            Action::DeleteCompleted { id, result } => {
                if self.check_session(&result) {
                    return Action::None;
                }
                self.vocabulary.state_mut().finish_delete(id, result);
                self.saved_words.update_data(self.vocabulary.state().saved_words());
                self.search.sync_query(self.vocabulary.state().search_term());
            }
            Action::LoadSavedWords => self.load_saved_words(),
            Action::SavedWordsLoaded(result) => {
                if self.check_session(&result) {
                    return Action::None;
                }
                self.vocabulary.state_mut().finish_load(result);
                self.saved_words.update_data(self.vocabulary.state().saved_words());
            }
            Action::PlayAudio(url) => {
                if !self.vocabulary.play_audio(url.as_deref()) {
                    info!("No pronunciation audio available");
                }
            }
            Action::Focus(focus) => self.set_focus(focus),
            Action::ToggleTheme => {
                self.theme = Theme::from_name(self.theme.name.toggled());
                debug!("Theme switched to {:?}", self.theme.name);
            }
            Action::ToggleTranslations => self.show_translations = !self.show_translations,
            Action::DismissError => self.vocabulary.state_mut().clear_error(),
            Action::Quit => {
                self.should_quit = true;
                return Action::Quit;
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Block::default().style(self.theme.text()), rect);

        let view = ViewContext {
            theme: &self.theme,
            vocabulary: self.vocabulary.state(),
            logger: &self.logger,
            show_translations: self.show_translations,
            max_definitions: self.max_definitions,
            auth_error: self.auth.error(),
            authenticating: self.auth.is_authenticating(),
        };

        if self.screen == Screen::Login {
            self.login.render(f, rect, &view);
            return;
        }

        let main = LayoutManager::main_layout(rect);
        let body = LayoutManager::body_layout(main[1], self.sidebar_width);
        let detail = LayoutManager::detail_layout(body[1]);

        self.saved_words.render(f, body[0], &view);
        self.search.render(f, detail[0], &view);
        self.details.render(f, detail[1], &view);
        TitleBar::render(f, main[0], &view);
        StatusBar::render(f, main[2], &view, self.focus);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect, &view);
        }
    }
}
