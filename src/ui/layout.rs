//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_MIN_WIDTH};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into a one-line header, the body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Split the body into the saved-words column and the detail pane
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_width: u16) -> Vec<Rect> {
        let width = Self::sidebar_width(area.width, sidebar_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Saved-words column width, shrunk so the detail pane keeps its minimum
    #[must_use]
    pub fn sidebar_width(screen_width: u16, configured: u16) -> u16 {
        let available = screen_width.saturating_sub(MAIN_AREA_MIN_WIDTH);
        configured.min(available).max(SIDEBAR_MIN_WIDTH.min(screen_width))
    }

    /// Split the detail pane into the search input and the word entry
    #[must_use]
    pub fn detail_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 70 };
        (help_width, help_height)
    }
}
