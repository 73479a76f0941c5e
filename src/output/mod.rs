//! Static report rendering.
//!
//! A [`Formatter`] decides how each field of a pull request looks; the
//! report writer owns layout and alignment.

pub mod formatter;
pub mod report;

pub use formatter::{DEFAULT_WEB_BASE, Formatter, PlainFormatter, RichFormatter, formatter_for};
pub use report::write_report;
