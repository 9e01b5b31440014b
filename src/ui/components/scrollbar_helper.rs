//! Scrollbar state and rendering shared by the scrollable panes.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Tracks scrollbar position for one bordered pane.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split a bordered pane into content and an optional one-column scrollbar.
    ///
    /// `total_items` is measured in rows, so multi-line list entries must be
    /// counted by their height.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize; // Exclude borders
        if !Self::needs_scrollbar(total_items, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>, style: Style) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(style)
                .thumb_style(style);

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
