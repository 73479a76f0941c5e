//! Field formatting for the static report.

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::github::models::{CheckStatus, PullRequestItem};

/// Web root repository links point to when none is configured.
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// Width of a formatted `YYYY-MM-DD` date.
pub const DATE_WIDTH: usize = 10;

/// Renders the individual fields of a report line.
///
/// Implementations must be pure: the same item always yields the same text.
pub trait Formatter: Send + Sync {
    /// Pull request number as `#<n>`.
    fn pull_request_number(&self, item: &PullRequestItem) -> String;

    /// Author login.
    fn author(&self, item: &PullRequestItem) -> String;

    /// Last update date in local time.
    fn updated_at(&self, item: &PullRequestItem) -> String;

    /// Title, marked when the pull request is a draft.
    fn title(&self, item: &PullRequestItem) -> String;

    /// Check status symbol, empty when unknown.
    fn check_status(&self, item: &PullRequestItem) -> String;

    /// Repository heading text.
    fn repository_name(&self, name: &str) -> String;
}

/// Unstyled `#<n>` label.
#[must_use]
pub fn number_label(item: &PullRequestItem) -> String {
    format!("#{}", item.number)
}

/// Local `YYYY-MM-DD` date of the last update.
#[must_use]
pub fn local_date(item: &PullRequestItem) -> String {
    item.updated_at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

fn plain_title(item: &PullRequestItem) -> String {
    if item.is_draft {
        format!("{} (draft)", item.title)
    } else {
        item.title.clone()
    }
}

/// Formatter producing bare text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn pull_request_number(&self, item: &PullRequestItem) -> String {
        number_label(item)
    }

    fn author(&self, item: &PullRequestItem) -> String {
        item.author.clone()
    }

    fn updated_at(&self, item: &PullRequestItem) -> String {
        local_date(item)
    }

    fn title(&self, item: &PullRequestItem) -> String {
        plain_title(item)
    }

    fn check_status(&self, item: &PullRequestItem) -> String {
        item.check_status.symbol().to_owned()
    }

    fn repository_name(&self, name: &str) -> String {
        name.to_owned()
    }
}

/// Formatter producing ANSI colours and OSC 8 hyperlinks.
///
/// Draft pull requests are muted so ready ones stand out.
#[derive(Debug, Clone)]
pub struct RichFormatter {
    web_base: String,
}

impl RichFormatter {
    /// Creates a formatter linking repositories under `web_base`.
    #[must_use]
    pub fn new(web_base: impl Into<String>) -> Self {
        let web_base = web_base.into();
        Self {
            web_base: web_base.trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for RichFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_BASE)
    }
}

fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

fn muted_if_draft(item: &PullRequestItem, text: &str, styled: ColoredString) -> String {
    if item.is_draft {
        text.bright_black().to_string()
    } else {
        styled.to_string()
    }
}

impl Formatter for RichFormatter {
    fn pull_request_number(&self, item: &PullRequestItem) -> String {
        let label = number_label(item);
        let styled = if item.is_draft {
            label.as_str().bright_black().bold()
        } else {
            label.as_str().magenta().bold()
        };
        hyperlink(&styled.to_string(), &item.url)
    }

    fn author(&self, item: &PullRequestItem) -> String {
        muted_if_draft(item, &item.author, item.author.as_str().green())
    }

    fn updated_at(&self, item: &PullRequestItem) -> String {
        let date = local_date(item);
        muted_if_draft(item, &date, date.as_str().normal())
    }

    fn title(&self, item: &PullRequestItem) -> String {
        let title = plain_title(item);
        muted_if_draft(item, &title, title.as_str().normal())
    }

    fn check_status(&self, item: &PullRequestItem) -> String {
        let symbol = item.check_status.symbol();
        match item.check_status {
            CheckStatus::Success => symbol.green().to_string(),
            CheckStatus::Failure => symbol.red().to_string(),
            CheckStatus::Pending | CheckStatus::Unknown => symbol.to_owned(),
        }
    }

    fn repository_name(&self, name: &str) -> String {
        hyperlink(name, &format!("{}/{name}", self.web_base))
    }
}

/// Picks the formatter for a run.
#[must_use]
pub fn formatter_for(no_color: bool, web_base: &str) -> Box<dyn Formatter> {
    if no_color {
        Box::new(PlainFormatter)
    } else {
        Box::new(RichFormatter::new(web_base))
    }
}
