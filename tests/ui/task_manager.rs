use crate::common::{word, FakeBackend};
use hazy::backend::{ApiError, Backend};
use hazy::ui::core::{Action, TaskManager};
use hazy::vocabulary::VocabularyState;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_spawn_reports_result_as_action() {
    let (mut manager, mut rx) = TaskManager::new();

    let first = manager.spawn("noop", async { Action::ToggleTheme });
    let second = manager.spawn("noop", async { Action::Quit });
    assert_ne!(first, second);

    let mut received = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
    received.sort_by_key(|a| matches!(a, Action::Quit));
    assert!(matches!(received[0], Action::ToggleTheme));
    assert!(matches!(received[1], Action::Quit));
}

#[tokio::test]
async fn test_spawn_search_carries_ticket() {
    let backend = Arc::new(FakeBackend::new());
    backend.on_lookup("hello", Ok(word(1, "hello")));
    let (mut manager, mut rx) = TaskManager::new();

    let mut state = VocabularyState::new();
    let ticket = state.begin_search("  hello ").unwrap();
    manager.spawn_search(backend.clone(), ticket.clone());

    match rx.recv().await.unwrap() {
        Action::SearchCompleted { ticket: got, result } => {
            assert_eq!(got, ticket);
            assert_eq!(result.unwrap().id, 1);
        }
        other => panic!("unexpected action {other:?}"),
    }
    assert_eq!(backend.calls(), vec!["lookup:hello".to_string()]);
}

#[tokio::test]
async fn test_spawn_delete_and_load() {
    let backend: Arc<dyn Backend> = Arc::new(FakeBackend::with_words(vec![word(1, "hello")]));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_delete(backend.clone(), 42);
    match rx.recv().await.unwrap() {
        Action::DeleteCompleted { id, result } => {
            assert_eq!(id, 42);
            assert!(matches!(result, Err(ApiError::NotFound { .. })));
        }
        other => panic!("unexpected action {other:?}"),
    }

    manager.spawn_load(backend);
    match rx.recv().await.unwrap() {
        Action::SavedWordsLoaded(Ok(words)) => assert_eq!(words.len(), 1),
        other => panic!("unexpected action {other:?}"),
    }
}

#[tokio::test]
async fn test_cleanup_and_cancel() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn("quick", async { Action::None });
    rx.recv().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(manager.cleanup_finished_tasks().len(), 1);

    manager.spawn("slow", async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Action::Quit
    });
    assert_eq!(manager.task_count(), 1);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(tokio::time::timeout(Duration::from_millis(50), rx.recv()).await.is_err());
}
