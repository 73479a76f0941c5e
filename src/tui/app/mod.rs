//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! pull request list. [`PullRequestApp::handle_message`] is the transition
//! function: it updates state and reports the side effect the runtime has to
//! perform, if any.
//!
//! # Module Structure
//!
//! - `navigation`: Cursor movement handlers
//! - `filter_handlers`: Filter editing handlers
//! - `layout`: Height calculations and scroll adjustment
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output

use crate::github::models::PullRequestItem;

use super::components::PullRequestListComponent;
use super::input::InputContext;
use super::messages::{AppEffect, AppMsg};
use super::state::FilterState;

mod filter_handlers;
mod layout;
mod model_impl;
mod navigation;
mod rendering;

/// Rows taken by the header, filter bar, spacer and status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;

/// Minimum number of entries shown regardless of terminal height.
pub(crate) const MIN_LIST_ENTRIES: usize = 1;

/// Main application model for the pull request list.
#[derive(Debug)]
pub struct PullRequestApp {
    /// All pull requests in aggregate order (unfiltered).
    pub(crate) items: Vec<PullRequestItem>,
    /// Cached indices of items matching the current filter.
    filtered_indices: Vec<usize>,
    /// Filter and cursor state.
    pub(crate) filter_state: FilterState,
    /// List title shown in the header.
    title: String,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// List component.
    list: PullRequestListComponent,
}

impl PullRequestApp {
    /// Creates a new application listing `items` under `title`.
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<PullRequestItem>) -> Self {
        let filtered_indices: Vec<_> = (0..items.len()).collect();
        let mut app = Self {
            items,
            filtered_indices,
            filter_state: FilterState::new(),
            title: title.into(),
            width: 80,
            height: 24,
            list: PullRequestListComponent::new(),
        };
        app.set_visible_list_height();
        app
    }

    /// Creates an empty application.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(String::new(), Vec::new())
    }

    /// Returns the list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the currently filtered items.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&PullRequestItem> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.items.get(index))
            .collect()
    }

    /// Returns the count of filtered items.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.filter_state.cursor_position
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.filter_state.scroll_offset
    }

    /// Returns the filter state.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    /// Returns the item under the cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PullRequestItem> {
        self.filtered_indices
            .get(self.filter_state.cursor_position)
            .and_then(|&index| self.items.get(index))
    }

    /// Returns the key binding set matching the current state.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.filter_state.editing {
            InputContext::Filtering
        } else {
            InputContext::Browsing
        }
    }

    /// Rebuilds the filtered indices cache based on the current query.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter_state.matches(item))
            .map(|(index, _)| index)
            .collect();
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Navigation and filter messages only touch cursor and filter state.
    /// `OpenSelected` leaves state untouched and yields the selected URL,
    /// or nothing when the filtered list is empty.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<AppEffect> {
        if msg.is_navigation() {
            self.handle_navigation_msg(msg);
            return None;
        }
        if msg.is_filter() {
            self.handle_filter_msg(msg);
            return None;
        }

        match msg {
            AppMsg::OpenSelected => self
                .selected_item()
                .map(|item| AppEffect::OpenUrl(item.url.clone())),
            AppMsg::Quit => Some(AppEffect::Quit),
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => {
                debug_assert!(false, "unrouted message: {msg:?}");
                None
            }
        }
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => debug_assert!(
                false,
                "non-navigation message routed to handle_navigation_msg"
            ),
        }
    }

    /// Dispatches filter messages to their handlers.
    fn handle_filter_msg(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::StartFilter => self.handle_start_filter(),
            AppMsg::FilterInput(ch) => self.handle_filter_input(*ch),
            AppMsg::FilterBackspace => self.handle_filter_backspace(),
            AppMsg::ApplyFilter => self.handle_apply_filter(),
            AppMsg::ClearFilter => self.handle_clear_filter(),
            _ => debug_assert!(false, "non-filter message routed to handle_filter_msg"),
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
    }
}
