//! Navigation handlers and cursor management.
//!
//! Each handler moves the cursor within the filtered list and then adjusts
//! scrolling so the cursor remains in the visible window.

use super::PullRequestApp;

impl PullRequestApp {
    fn move_cursor_up(&mut self, step: usize) {
        self.filter_state.cursor_position = self.filter_state.cursor_position.saturating_sub(step);
        self.adjust_scroll_to_cursor();
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.filtered_count().saturating_sub(1);
        self.filter_state.cursor_position = self
            .filter_state
            .cursor_position
            .saturating_add(step)
            .min(max_index);
        self.adjust_scroll_to_cursor();
    }

    pub(super) fn handle_cursor_up(&mut self) {
        self.move_cursor_up(1);
    }

    pub(super) fn handle_cursor_down(&mut self) {
        self.move_cursor_down(1);
    }

    pub(super) fn handle_page_up(&mut self) {
        self.move_cursor_up(self.list.visible_height().max(1));
    }

    pub(super) fn handle_page_down(&mut self) {
        self.move_cursor_down(self.list.visible_height().max(1));
    }

    pub(super) const fn handle_home(&mut self) {
        self.filter_state.scroll_offset = 0;
        self.filter_state.cursor_position = 0;
    }

    pub(super) fn handle_end(&mut self) {
        self.filter_state.cursor_position = self.filtered_count().saturating_sub(1);
        self.adjust_scroll_to_cursor();
    }
}
