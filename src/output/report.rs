//! Aligned, grouped report of pull requests.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::github::error::ListingError;
use crate::github::models::{PullRequestItem, RepositoryItem};

use super::formatter::{DATE_WIDTH, Formatter, local_date, number_label};

/// Column widths shared by every line of one repository block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    number: usize,
    author: usize,
}

impl ColumnWidths {
    fn measure(items: &[&PullRequestItem]) -> Self {
        items.iter().fold(Self { number: 0, author: 0 }, |widths, item| Self {
            number: widths.number.max(number_label(item).width()),
            author: widths.author.max(item.author.width()),
        })
    }
}

fn padding(target: usize, used: usize) -> String {
    " ".repeat(target.saturating_sub(used))
}

fn render_line(item: &PullRequestItem, widths: ColumnWidths, formatter: &dyn Formatter) -> String {
    let mut line = formatter.pull_request_number(item);
    line.push_str(&padding(widths.number + 1, number_label(item).width()));
    line.push_str(&formatter.author(item));
    line.push_str(&padding(widths.author, item.author.width()));
    line.push(' ');
    line.push_str(&formatter.updated_at(item));
    line.push_str(&padding(DATE_WIDTH, local_date(item).width()));
    line.push(' ');
    line.push_str(&formatter.title(item));

    let status = formatter.check_status(item);
    if !status.is_empty() {
        line.push(' ');
        line.push_str(&status);
    }
    line
}

/// Writes each repository as a `# <name>` heading followed by its pull
/// requests, newest number first, and a blank line.
///
/// The display order is computed on a copy; `repositories` is left in its
/// stored ascending order. Nothing is written for an empty slice.
///
/// # Errors
///
/// Returns [`ListingError::Io`] when the writer fails.
pub fn write_report<W>(
    writer: &mut W,
    repositories: &[RepositoryItem],
    formatter: &dyn Formatter,
) -> Result<(), ListingError>
where
    W: Write + ?Sized,
{
    for repository in repositories {
        let mut items: Vec<&PullRequestItem> = repository.pull_requests.iter().collect();
        items.sort_by(|left, right| right.number.cmp(&left.number));
        let widths = ColumnWidths::measure(&items);

        writeln!(writer, "# {}", formatter.repository_name(&repository.name))?;
        for item in items {
            writeln!(writer, "{}", render_line(item, widths, formatter))?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
