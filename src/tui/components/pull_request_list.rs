//! Pull request list component.
//!
//! Each entry takes two rows: a label naming the repository, number, author
//! and check symbol, followed by the indented title.

use unicode_width::UnicodeWidthChar;

use crate::github::models::PullRequestItem;

/// Default visible entry count for the list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Rows used by one entry.
pub const ROWS_PER_ENTRY: usize = 2;

/// Context for rendering the list view.
#[derive(Debug, Clone)]
pub struct PullRequestListViewContext<'a> {
    /// Full slice of all pull requests.
    pub items: &'a [PullRequestItem],
    /// Indices of items matching the current filter.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of entries scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible entries.
    pub visible_height: usize,
    /// Maximum row width in columns.
    pub max_width: usize,
}

/// Component for displaying the pull request list.
#[derive(Debug, Clone)]
pub struct PullRequestListComponent {
    visible_height: usize,
}

impl Default for PullRequestListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PullRequestListComponent {
    /// Creates a new list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible entry count for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible entry count.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the entries inside the scroll window.
    #[must_use]
    pub fn view(&self, ctx: &PullRequestListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No pull requests match the current filter.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };
        let start = ctx.scroll_offset;
        let end = start
            .saturating_add(visible_height)
            .min(ctx.filtered_indices.len());

        let mut output = String::new();
        for (display_index, &item_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let Some(item) = ctx.items.get(item_index) else {
                continue;
            };
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            let label = format!("{prefix} {}", entry_label(item));
            output.push_str(&truncate_to_width(&label, ctx.max_width));
            output.push('\n');
            output.push_str(&truncate_to_width(&format!("    {}", item.title), ctx.max_width));
            output.push('\n');
        }
        output
    }
}

/// Label row of one entry: `<repo> #<n> @<author> <symbol>`.
#[must_use]
pub fn entry_label(item: &PullRequestItem) -> String {
    format!(
        "{} #{} @{} {}",
        item.repository,
        item.number,
        item.author,
        item.check_status.symbol()
    )
    .trim_end()
    .to_owned()
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    let mut output = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(width) > max_width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(width);
    }
    output
}
