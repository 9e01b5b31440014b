use crate::common::{word, FakeBackend};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hazy::auth::{AuthService, MemoryTokenStore, Session};
use hazy::backend::ApiError;
use hazy::config::{ThemeName, UiConfig};
use hazy::constants::ERROR_SESSION_EXPIRED;
use hazy::logger::Logger;
use hazy::ui::core::{Action, DialogType, EventType, Focus};
use hazy::ui::{AppComponent, Screen};
use hazy::vocabulary::{DisabledAudioPlayer, Vocabulary};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn app_with(backend: Arc<FakeBackend>, store: MemoryTokenStore) -> AppComponent {
    let mut auth = AuthService::new(backend.clone(), Session::new(), Box::new(store));
    auth.rehydrate();
    let vocabulary = Vocabulary::new(backend, Arc::new(DisabledAudioPlayer));
    AppComponent::new(&UiConfig::default(), auth, vocabulary, Logger::new())
}

fn logged_in_app(backend: Arc<FakeBackend>) -> AppComponent {
    app_with(backend, MemoryTokenStore::with_token("tok"))
}

/// Feed the next background result back into the app
async fn pump(app: &mut AppComponent) {
    let action = app.next_background_action().await.expect("a background result");
    app.dispatch(action);
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_starts_on_login_without_saved_session() {
    let mut app = app_with(Arc::new(FakeBackend::new()), MemoryTokenStore::new());
    app.start();

    assert_eq!(app.screen(), Screen::Login);
    assert!(screen_text(&mut app).contains("Username"));
}

#[tokio::test]
async fn test_login_opens_main_screen_and_loads_words() {
    let backend = Arc::new(FakeBackend::with_words(vec![word(1, "hello")]));
    let mut app = app_with(backend.clone(), MemoryTokenStore::new());

    app.dispatch(Action::SubmitLogin {
        username: "alice".to_string(),
        password: "secret".to_string(),
    });
    assert!(app.auth().is_authenticating());

    pump(&mut app).await;
    assert_eq!(app.screen(), Screen::Main);

    pump(&mut app).await;
    assert_eq!(app.vocabulary().state().saved_words().len(), 1);
    assert_eq!(backend.calls(), vec!["token:alice".to_string(), "fetch".to_string()]);
}

#[tokio::test]
async fn test_failed_login_stays_on_login_screen() {
    let mut app = app_with(Arc::new(FakeBackend::new()), MemoryTokenStore::new());

    app.dispatch(Action::SubmitLogin {
        username: "alice".to_string(),
        password: "wrong".to_string(),
    });
    pump(&mut app).await;

    assert_eq!(app.screen(), Screen::Login);
    assert_eq!(app.auth().error(), Some("Incorrect username or password"));
    assert!(screen_text(&mut app).contains("Incorrect username or password"));
}

#[tokio::test]
async fn test_search_from_keyboard() {
    let backend = Arc::new(FakeBackend::new());
    backend.on_lookup("hello", Ok(word(1, "hello")));
    let mut app = logged_in_app(backend);
    app.start();
    pump(&mut app).await;

    type_text(&mut app, "hello").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(app.vocabulary().state().is_loading());

    pump(&mut app).await;
    let state = app.vocabulary().state();
    assert_eq!(state.current_word().map(|w| w.id), Some(1));
    assert_eq!(state.saved_words().len(), 1);

    let text = screen_text(&mut app);
    assert!(text.contains("Saved Words (1)"));
    assert!(text.contains("Meaning of hello"));
}

#[tokio::test]
async fn test_rejected_token_returns_to_login() {
    let backend = Arc::new(FakeBackend::new());
    backend.fail_fetch(ApiError::Auth { detail: None });
    let mut app = logged_in_app(backend);
    app.start();

    pump(&mut app).await;

    assert_eq!(app.screen(), Screen::Login);
    assert!(!app.auth().is_authenticated());
    assert_eq!(app.auth().error(), Some(ERROR_SESSION_EXPIRED));
    assert!(app.vocabulary().state().saved_words().is_empty());
}

#[tokio::test]
async fn test_delete_with_confirmation() {
    let backend = Arc::new(FakeBackend::with_words(vec![word(2, "bat"), word(1, "ant")]));
    let mut app = logged_in_app(backend);
    app.start();
    pump(&mut app).await;

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.focus(), Focus::SavedWords);

    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(
        app.dialog(),
        Some(&DialogType::DeleteConfirmation {
            id: 2,
            word: "bat".to_string()
        })
    );
    assert!(screen_text(&mut app).contains("Confirm Delete"));

    press(&mut app, KeyCode::Enter).await;
    assert!(app.dialog().is_none());
    assert!(app.vocabulary().state().is_deleting());

    pump(&mut app).await;
    let ids: Vec<i64> = app.vocabulary().state().saved_words().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_q_types_in_search_but_quits_from_list() {
    let mut app = logged_in_app(Arc::new(FakeBackend::new()));
    app.start();

    press(&mut app, KeyCode::Char('q')).await;
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_from_login() {
    let mut app = app_with(Arc::new(FakeBackend::new()), MemoryTokenStore::new());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_theme_and_translation_toggles() {
    let mut app = logged_in_app(Arc::new(FakeBackend::new()));
    assert_eq!(app.theme().name, ThemeName::Dark);
    let translations = app.show_translations();

    app.dispatch(Action::ToggleTheme);
    app.dispatch(Action::ToggleTranslations);

    assert_eq!(app.theme().name, ThemeName::Light);
    assert_eq!(app.show_translations(), !translations);

    let text = screen_text(&mut app);
    assert!(text.contains("Hazy English"));
    assert!(text.contains("light"));
}

#[tokio::test]
async fn test_logout_clears_vocabulary() {
    let backend = Arc::new(FakeBackend::with_words(vec![word(1, "hello")]));
    let mut app = logged_in_app(backend);
    app.start();
    pump(&mut app).await;

    app.dispatch(Action::Logout);

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.auth().error().is_none());
    assert!(app.vocabulary().state().saved_words().is_empty());
}

#[tokio::test]
async fn test_failed_initial_load_stops_showing_loading() {
    let backend = Arc::new(FakeBackend::new());
    backend.fail_fetch(ApiError::Server { status: 500, detail: None });
    let mut app = logged_in_app(backend);
    app.start();
    assert!(app.vocabulary().state().is_loading_words());
    assert!(screen_text(&mut app).contains("Loading saved words"));

    pump(&mut app).await;

    let state = app.vocabulary().state();
    assert!(!state.is_loading_words());
    assert!(state.saved_words().is_empty());
    assert!(state.error().is_some());

    let text = screen_text(&mut app);
    assert!(!text.contains("Loading saved words"));
    assert!(text.contains("No saved words yet"));
}

#[tokio::test]
async fn test_repeated_submit_while_logging_in_sends_one_request() {
    let backend = Arc::new(FakeBackend::new());
    let mut app = app_with(backend.clone(), MemoryTokenStore::new());
    let submit = || Action::SubmitLogin {
        username: "alice".to_string(),
        password: "secret".to_string(),
    };

    app.dispatch(submit());
    app.dispatch(submit());

    pump(&mut app).await;
    assert_eq!(app.screen(), Screen::Main);
    pump(&mut app).await;

    let extra = tokio::time::timeout(Duration::from_millis(50), app.next_background_action()).await;
    assert!(extra.is_err());
    assert_eq!(backend.calls(), vec!["token:alice".to_string(), "fetch".to_string()]);
}
