//! State management for the pull request list TUI.

mod filter_state;

pub use filter_state::FilterState;
