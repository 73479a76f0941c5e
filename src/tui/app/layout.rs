//! Layout helpers for the list model.
//!
//! This module derives the list height from the terminal size and keeps the
//! cursor inside the scroll window.

use super::{CHROME_HEIGHT, MIN_LIST_ENTRIES, PullRequestApp};
use crate::tui::components::ROWS_PER_ENTRY;

impl PullRequestApp {
    /// Calculates the number of entries that fit below the chrome.
    pub(super) const fn calculate_list_height(&self) -> usize {
        let body_rows = (self.height as usize).saturating_sub(CHROME_HEIGHT);
        match body_rows.checked_div(ROWS_PER_ENTRY) {
            Some(entries) if entries >= MIN_LIST_ENTRIES => entries,
            _ => MIN_LIST_ENTRIES,
        }
    }

    /// Stores the visible entry count in the list component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.list.set_visible_height(list_height);
    }

    /// Adjusts scroll offset so the selected cursor remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.filter_state.cursor_position;
        let visible_height = self.list.visible_height();

        if visible_height == 0 {
            return;
        }

        if cursor < self.filter_state.scroll_offset {
            self.filter_state.scroll_offset = cursor;
            return;
        }

        let viewport_end = self
            .filter_state
            .scroll_offset
            .saturating_add(visible_height);
        if cursor >= viewport_end {
            self.filter_state.scroll_offset =
                cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
