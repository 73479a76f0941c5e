//! Filter message handlers.
//!
//! Every change to the query rebuilds the filtered list and clamps the
//! cursor to it.

use super::PullRequestApp;

impl PullRequestApp {
    fn refilter(&mut self) {
        self.rebuild_filter_cache();
        self.filter_state.clamp_cursor(self.filtered_count());
        self.adjust_scroll_to_cursor();
    }

    /// Starts editing a fresh query.
    pub(super) fn handle_start_filter(&mut self) {
        self.filter_state.query.clear();
        self.filter_state.editing = true;
        self.refilter();
    }

    pub(super) fn handle_filter_input(&mut self, ch: char) {
        if !self.filter_state.editing {
            return;
        }
        self.filter_state.query.push(ch);
        self.refilter();
    }

    pub(super) fn handle_filter_backspace(&mut self) {
        if !self.filter_state.editing {
            return;
        }
        self.filter_state.query.pop();
        self.refilter();
    }

    /// Stops editing; an empty query leaves the list unfiltered.
    pub(super) fn handle_apply_filter(&mut self) {
        self.filter_state.editing = false;
        if !self.filter_state.is_active() {
            self.filter_state.query.clear();
        }
        self.refilter();
    }

    pub(super) fn handle_clear_filter(&mut self) {
        self.filter_state.query.clear();
        self.filter_state.editing = false;
        self.refilter();
    }
}
