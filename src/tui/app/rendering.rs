//! Rendering logic for the list application.
//!
//! These are pure query methods that read state without modification.

use super::PullRequestApp;
use crate::tui::components::PullRequestListViewContext;

impl PullRequestApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        format!("{}\n", self.title)
    }

    /// Renders the filter bar with match counts.
    pub(super) fn render_filter_bar(&self) -> String {
        let label = self.filter_state.label();
        let count = self.filtered_count();
        let total = self.items.len();
        format!("Filter: {label} ({count}/{total})\n")
    }

    /// Renders the visible list entries.
    pub(super) fn render_list(&self) -> String {
        let ctx = PullRequestListViewContext {
            items: &self.items,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.filter_state.cursor_position,
            scroll_offset: self.filter_state.scroll_offset,
            visible_height: self.list.visible_height(),
            max_width: (self.width as usize).saturating_sub(1).max(1),
        };
        self.list.view(&ctx)
    }

    /// Renders the status bar with key hints for the active context.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.filter_state.editing {
            "type to filter  Enter:apply  Esc:clear  ctrl+c:quit"
        } else if self.width <= 60 {
            "o:open  /:filter  ctrl+c:quit"
        } else {
            "j/k:move  g/G:first/last  o:open in browser  /:filter  Esc:clear  ctrl+c:quit"
        };
        format!("{hints}\n")
    }
}
