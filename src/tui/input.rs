//! Input handling for the TUI application.
//!
//! Key events map to different messages depending on whether a filter query
//! is being edited.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which set of key bindings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Moving through the list.
    Browsing,
    /// Typing a filter query.
    Filtering,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::Filtering => map_filtering_key(key.key),
    }
}

const fn map_browsing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('o') => Some(AppMsg::OpenSelected),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('/') => Some(AppMsg::StartFilter),
        KeyCode::Esc => Some(AppMsg::ClearFilter),
        _ => None,
    }
}

const fn map_filtering_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(ch) => Some(AppMsg::FilterInput(ch)),
        KeyCode::Backspace => Some(AppMsg::FilterBackspace),
        KeyCode::Enter => Some(AppMsg::ApplyFilter),
        KeyCode::Esc => Some(AppMsg::ClearFilter),
        KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Up => Some(AppMsg::CursorUp),
        _ => None,
    }
}
