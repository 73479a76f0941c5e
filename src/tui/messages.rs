//! Message and effect types for the TUI update loop.
//!
//! Messages represent user actions and system events. Effects describe what
//! the runtime must do after a message has been handled.

/// Messages for the pull request list application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Filtering
    /// Begin editing a new filter query.
    StartFilter,
    /// Append a character to the query being edited.
    FilterInput(char),
    /// Remove the last character of the query being edited.
    FilterBackspace,
    /// Stop editing and keep the current query.
    ApplyFilter,
    /// Drop the query and show every pull request.
    ClearFilter,

    // Actions
    /// Open the selected pull request in the browser.
    OpenSelected,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::PageUp | Self::PageDown | Self::Home | Self::End
        )
    }

    /// Returns true for filter editing messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::StartFilter
                | Self::FilterInput(_)
                | Self::FilterBackspace
                | Self::ApplyFilter
                | Self::ClearFilter
        )
    }
}

/// Side effect requested by a handled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEffect {
    /// Open the URL in the system browser.
    OpenUrl(String),
    /// Terminate the program.
    Quit,
}
