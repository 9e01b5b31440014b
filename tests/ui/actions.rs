use hazy::ui::core::actions::{Action, DialogType, Focus};

#[test]
fn test_default_focus_is_search() {
    assert_eq!(Focus::default(), Focus::Search);
}

#[test]
fn test_dialog_types_compare_by_target() {
    let a = DialogType::DeleteConfirmation {
        id: 1,
        word: "hello".to_string(),
    };
    let b = DialogType::DeleteConfirmation {
        id: 2,
        word: "hello".to_string(),
    };
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}

#[test]
fn test_actions_are_cloneable_for_logging() {
    let action = Action::Search("hello".to_string());
    let rendered = format!("{:?}", action.clone());
    assert!(rendered.contains("hello"));
}
