//! Retrieval of pull requests for one or more organisations.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::{ListingOptions, SearchLimit};

use super::aggregate::{RepositoryGrouper, aggregate_records};
use super::error::ListingError;
use super::gateway::SearchGateway;
use super::models::RepositoryItem;
use super::query::build_search_query;

/// Runs one search and groups its records by repository.
///
/// # Errors
///
/// Returns [`ListingError::Fetch`] with the gateway's error unchanged, or
/// [`ListingError::DuplicatePullRequest`] when the response repeats a pull
/// request.
pub async fn fetch_pull_requests<G>(
    gateway: &G,
    query: &str,
    limit: SearchLimit,
) -> Result<Vec<RepositoryItem>, ListingError>
where
    G: SearchGateway + ?Sized,
{
    let records = gateway.search_pull_requests(query, limit).await?;
    tracing::debug!(query, count = records.len(), "search returned");
    aggregate_records(records)
}

/// Searches every organisation concurrently and merges the results.
///
/// Each organisation runs as its own task and every task is allowed to
/// finish. Outcomes are consumed in completion order: the first failure
/// observed is returned and nothing else is kept. When all searches
/// succeed, repositories found under several organisations are merged into
/// one group and the result is in canonical order.
///
/// # Errors
///
/// Returns [`ListingError::Configuration`] for an empty organisation list,
/// the first search or aggregation error otherwise, and
/// [`ListingError::Task`] when a search task panics.
pub async fn fetch_organisations<G>(
    gateway: Arc<G>,
    organisations: &[String],
    options: &ListingOptions,
) -> Result<Vec<RepositoryItem>, ListingError>
where
    G: SearchGateway + ?Sized + 'static,
{
    if organisations.is_empty() {
        return Err(ListingError::configuration(
            "at least one organisation is required",
        ));
    }

    let mut tasks = JoinSet::new();
    for organisation in organisations {
        let gateway = Arc::clone(&gateway);
        let query = build_search_query(organisation, options);
        let limit = options.limit;
        tasks.spawn(async move { fetch_pull_requests(gateway.as_ref(), &query, limit).await });
    }

    let mut grouper = RepositoryGrouper::new();
    let mut first_error: Option<ListingError> = None;
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|error| ListingError::Task {
                message: error.to_string(),
            })
            .and_then(|result| result);

        match (outcome, first_error.is_some()) {
            (Ok(repositories), false) => grouper.extend_repositories(repositories),
            (Ok(_), true) => {}
            (Err(error), false) => {
                tracing::debug!(%error, "search failed, waiting for remaining tasks");
                first_error = Some(error);
            }
            (Err(error), true) => tracing::debug!(%error, "discarding later search failure"),
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => grouper.finish(),
    }
}
