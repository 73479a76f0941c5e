//! Command-line surface of the `list-prs` binary.
//!
//! [`Cli`] mirrors the flags accepted on the command line; [`Cli::into_request`]
//! validates them into a [`ListingRequest`] before any network work starts.
//! The listing operation itself lives in [`listing`].

use clap::Parser;

use list_prs::{ListingError, ListingOptions, ListingRequest, SearchLimit};

pub mod listing;

/// List open pull requests for one or more organisations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "list-prs",
    version = env!("CARGO_PKG_VERSION"),
    about = "List PRs for one or more orgs",
    long_about = None
)]
pub struct Cli {
    /// Organisations to search.
    #[arg(value_name = "ORG", required = true)]
    pub organisations: Vec<String>,

    /// Exclude a repository (`name` or `owner/name`); repeatable.
    #[arg(short = 'e', long = "exclude", value_name = "REPO")]
    pub excludes: Vec<String>,

    /// Max number of search results per organisation.
    #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
    pub limit: i64,

    /// Filter by author.
    #[arg(short, long)]
    pub author: Option<String>,

    /// Additional search qualifier appended verbatim; repeatable.
    #[arg(short = 'q', long = "additional-query", value_name = "QUERY")]
    pub additional_queries: Vec<String>,

    /// Log the search queries.
    #[arg(short, long)]
    pub verbose: bool,

    /// Browse the results interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Disable colour output and hyperlinks.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Validates the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] for a non-positive limit or
    /// when no organisation remains after trimming.
    pub fn into_request(self) -> Result<ListingRequest, ListingError> {
        let options = ListingOptions {
            limit: SearchLimit::new(self.limit)?,
            excludes: self.excludes,
            author: self.author.filter(|author| !author.trim().is_empty()),
            additional_queries: self.additional_queries,
            verbose: self.verbose,
            interactive: self.interactive,
            no_color: self.no_color,
        };
        ListingRequest::new(self.organisations, options)
    }
}
