//! Filter and cursor state for the pull request list.
//!
//! The cursor is retained when the filter changes and clamped to the
//! shortened list when needed.

use crate::github::models::PullRequestItem;

/// Text filter and cursor position for the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Current filter text; empty means everything matches.
    pub query: String,
    /// Whether keystrokes are currently edited into the query.
    pub editing: bool,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (lines scrolled from top).
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a new filter state with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the item's repository, author or title contains
    /// the query, ignoring case.
    #[must_use]
    pub fn matches(&self, item: &PullRequestItem) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            item.repository.as_str(),
            item.author.as_str(),
            item.title.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Returns true when a non-empty query narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Human-readable description for the filter bar.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.editing, self.is_active()) {
            (true, _) => format!("/{}", self.query),
            (false, true) => format!("\"{}\"", self.query.trim()),
            (false, false) => "none".to_owned(),
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }
}
