//! Shared fixtures for the integration tests.

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates a temporary directory used as an isolated home or working
/// directory.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Builds one pull request node as returned by the GraphQL search.
///
/// `rollup` is the `statusCheckRollup.state` of the last commit; `None`
/// models checks that have not reported a state yet.
pub fn pull_request_node(
    repository: &str,
    number: u64,
    author: &str,
    updated_at: &str,
    is_draft: bool,
    rollup: Option<&str>,
) -> Value {
    let status = rollup.map_or_else(|| json!({ "state": null }), |state| json!({ "state": state }));
    json!({
        "number": number,
        "title": format!("Title {number}"),
        "url": format!("https://github.com/{repository}/pull/{number}"),
        "updatedAt": updated_at,
        "isDraft": is_draft,
        "author": { "login": author },
        "repository": { "nameWithOwner": repository },
        "commits": { "nodes": [ { "commit": { "statusCheckRollup": status } } ] }
    })
}

/// Wraps nodes in a successful search response body.
pub fn search_response(nodes: Vec<Value>) -> Value {
    json!({ "data": { "search": { "nodes": nodes } } })
}
