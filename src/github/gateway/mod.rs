//! Gateway for running pull request searches through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles the real GraphQL request.

mod client;
mod error_mapping;
mod search;

pub use search::OctocrabSearchGateway;

use async_trait::async_trait;

use crate::config::SearchLimit;
use crate::github::error::FetchError;
use crate::github::models::PullRequestRecord;

/// Gateway that can execute a pull request search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run `query` and return at most `limit` pull request records, in the
    /// order the service returned them.
    async fn search_pull_requests(
        &self,
        query: &str,
        limit: SearchLimit,
    ) -> Result<Vec<PullRequestRecord>, FetchError>;
}
