//! UI components for the pull request list TUI.

mod pull_request_list;

pub use pull_request_list::{
    PullRequestListComponent, PullRequestListViewContext, ROWS_PER_ENTRY, entry_label,
};
