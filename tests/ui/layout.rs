use hazy::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_MIN_WIDTH};
use hazy::ui::components::scrollbar_helper::ScrollbarHelper;
use hazy::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_title_and_status_lines() {
    let area = Rect::new(0, 0, 100, 30);
    let chunks = LayoutManager::main_layout(area);

    assert_eq!(chunks[0], Rect::new(0, 0, 100, 1));
    assert_eq!(chunks[1], Rect::new(0, 1, 100, 28));
    assert_eq!(chunks[2], Rect::new(0, 29, 100, 1));
}

#[test]
fn test_body_layout_uses_configured_sidebar_width() {
    let chunks = LayoutManager::body_layout(Rect::new(0, 0, 120, 29), 34);
    assert_eq!(chunks[0].width, 34);
    assert_eq!(chunks[1].width, 86);
}

#[test]
fn test_sidebar_shrinks_on_narrow_screens() {
    assert_eq!(LayoutManager::sidebar_width(60, 50), 60 - MAIN_AREA_MIN_WIDTH);
    assert_eq!(LayoutManager::sidebar_width(30, 34), SIDEBAR_MIN_WIDTH);
    assert_eq!(LayoutManager::sidebar_width(10, 34), 10);
}

#[test]
fn test_centered_rect_lines_is_centered() {
    let area = Rect::new(0, 0, 100, 40);
    let popup = LayoutManager::centered_rect_lines(50, 6, area);

    assert_eq!(popup.height, 6);
    assert_eq!(popup.width, 50);
    assert_eq!(popup.x, 25);
}

#[test]
fn test_scrollbar_detection() {
    let rect = Rect::new(0, 0, 50, 5);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 10);
    let scrollbar = scrollbar_area.expect("10 rows cannot fit in 3");
    assert_eq!(scrollbar.width, 1);
    assert_eq!(scrollbar.height, 3);
    assert_eq!(list_area.width, 49);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 3);
    assert!(scrollbar_area.is_none());
    assert_eq!(list_area, rect);
}
