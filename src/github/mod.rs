//! GitHub pull request search and aggregation.
//!
//! This module wraps Octocrab to run a GraphQL issue search per organisation,
//! normalise the returned records, and group them by repository. Errors are
//! mapped into user-friendly variants so that callers can surface precise
//! failures without exposing Octocrab internals.

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod query;

pub use aggregate::{RepositoryGrouper, aggregate_records};
pub use error::{FetchError, ListingError};
pub use fetch::{fetch_organisations, fetch_pull_requests};
pub use gateway::{OctocrabSearchGateway, SearchGateway};
pub use locator::{ApiBase, PersonalAccessToken};
pub use models::{CheckStatus, PullRequestItem, PullRequestRecord, RepositoryItem};
pub use query::build_search_query;

#[cfg(test)]
pub use gateway::MockSearchGateway;

#[cfg(test)]
pub(crate) mod test_support;
