use hazy::ui::core::event_handler::EventHandler;
use std::time::Duration;

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::new();
    assert_eq!(handler.tick_rate(), Duration::from_millis(50));
}

#[test]
fn test_custom_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(10));
    assert_eq!(handler.tick_rate(), Duration::from_millis(10));
}

#[tokio::test]
async fn test_render_throttling() {
    let mut handler = EventHandler::new();
    handler.mark_rendered();
    assert!(!handler.should_render());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.should_render());
}
