use crate::common::word;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hazy::backend::Definition;
use hazy::ui::components::{
    DialogComponent, LoginComponent, SavedWordsComponent, SearchComponent, WordDetailsComponent,
};
use hazy::ui::core::{Action, Component, DialogType, Focus};
use hazy::ui::Theme;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(component: &mut impl Component, text: &str) {
    for c in text.chars() {
        component.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_login_collects_both_fields() {
    let mut login = LoginComponent::new();
    type_text(&mut login, "alice");

    // Enter on the username moves to the empty password field first
    assert!(matches!(login.handle_key_events(key(KeyCode::Enter)), Action::None));
    type_text(&mut login, "s3cret");

    match login.handle_key_events(key(KeyCode::Enter)) {
        Action::SubmitLogin { username, password } => {
            assert_eq!(username, "alice");
            assert_eq!(password, "s3cret");
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_login_clear_password_keeps_username() {
    let mut login = LoginComponent::new();
    type_text(&mut login, "alice");
    login.handle_key_events(key(KeyCode::Tab));
    type_text(&mut login, "wrong");
    login.handle_key_events(key(KeyCode::Backspace));

    assert_eq!(login.password, "wron");
    login.clear_password();

    assert_eq!(login.username, "alice");
    assert!(login.password.is_empty());
}

#[test]
fn test_search_submits_query_and_ignores_ctrl_chars() {
    let mut search = SearchComponent::new();
    type_text(&mut search, "hello");
    search.handle_key_events(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));

    match search.handle_key_events(key(KeyCode::Enter)) {
        Action::Search(term) => assert_eq!(term, "hello"),
        other => panic!("unexpected action {other:?}"),
    }
    assert!(matches!(
        search.handle_key_events(key(KeyCode::Esc)),
        Action::Focus(Focus::SavedWords)
    ));
}

#[test]
fn test_saved_words_navigation_and_actions() {
    let mut list = SavedWordsComponent::new();
    list.update_data(&[word(3, "cat"), word(2, "bat"), word(1, "ant")]);

    list.handle_key_events(key(KeyCode::Char('j')));
    list.handle_key_events(key(KeyCode::Char('j')));
    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected().map(|w| w.id), Some(1));

    list.handle_key_events(key(KeyCode::Char('k')));
    assert!(matches!(list.handle_key_events(key(KeyCode::Enter)), Action::SelectWord(2)));

    match list.handle_key_events(key(KeyCode::Char('d'))) {
        Action::ShowDialog(DialogType::DeleteConfirmation { id, word }) => {
            assert_eq!(id, 2);
            assert_eq!(word, "bat");
        }
        other => panic!("unexpected action {other:?}"),
    }

    match list.handle_key_events(key(KeyCode::Char('p'))) {
        Action::PlayAudio(Some(url)) => assert!(url.ends_with("bat.mp3")),
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_saved_words_keeps_cursor_on_same_word() {
    let mut list = SavedWordsComponent::new();
    list.update_data(&[word(2, "bat"), word(1, "ant")]);
    list.handle_key_events(key(KeyCode::Down));

    list.update_data(&[word(3, "cat"), word(2, "bat"), word(1, "ant")]);
    assert_eq!(list.selected().map(|w| w.id), Some(1));

    list.update_data(&[word(3, "cat")]);
    assert_eq!(list.selected().map(|w| w.id), Some(3));

    list.update_data(&[]);
    assert!(list.selected().is_none());
    assert!(matches!(list.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_dialog_delete_confirmation() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
        id: 7,
        word: "hello".to_string(),
    }));
    assert!(dialog.is_visible());

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::DeleteWord(7)));

    // Passing the confirmation through closes the dialog and forwards the delete
    assert!(matches!(dialog.update(action), Action::DeleteWord(7)));
    assert!(!dialog.is_visible());
}

#[test]
fn test_dialog_cancel() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_details_limits_definitions_and_hides_translations() {
    let mut entry = word(1, "run");
    entry.meanings[0].definitions = (1..=5)
        .map(|i| Definition {
            text: format!("sense {i}"),
            example: None,
            translation: Some(format!("nghĩa {i}")),
            example_translation: None,
        })
        .collect();
    let theme = Theme::night();

    let text = |lines: Vec<ratatui::text::Line>| -> String {
        lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().join("\n")
    };

    let shown = text(WordDetailsComponent::entry_lines(&entry, &theme, true, 3));
    assert!(shown.contains("sense 3"));
    assert!(!shown.contains("sense 4"));
    assert!(shown.contains("+2 more"));
    assert!(shown.contains("nghĩa 1"));

    let hidden = text(WordDetailsComponent::entry_lines(&entry, &theme, false, 3));
    assert!(!hidden.contains("nghĩa"));
}

#[test]
fn test_details_scroll_counts_wrapped_rows() {
    use ratatui::text::Line;

    let long = "a definition long enough to wrap across several rows of a narrow pane";
    let lines = vec![Line::from("run"), Line::from(long), Line::from("end")];

    assert_eq!(WordDetailsComponent::max_scroll(&lines, 80, 10), 0);
    assert_eq!(WordDetailsComponent::max_scroll(&lines, 80, 2), 1);

    // Wrapped at 20 columns the long line needs several rows
    let narrow = WordDetailsComponent::max_scroll(&lines, 20, 2);
    assert!(narrow > 1);
    assert_eq!(WordDetailsComponent::max_scroll(&lines, 20, 100), 0);
}
