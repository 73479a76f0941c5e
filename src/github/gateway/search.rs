//! Octocrab implementation of the search gateway.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::SearchLimit;
use crate::github::error::{FetchError, ListingError};
use crate::github::locator::{ApiBase, PersonalAccessToken};
use crate::github::models::PullRequestRecord;

use super::SearchGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

const SEARCH_ROUTE: &str = "/graphql";

const SEARCH_DOCUMENT: &str = r"query PullRequests($first: Int!, $query: String!) {
  search(first: $first, type: ISSUE, query: $query) {
    nodes {
      ... on PullRequest {
        number
        title
        url
        updatedAt
        isDraft
        author { login }
        repository { nameWithOwner }
        commits(last: 1) {
          nodes { commit { statusCheckRollup { state } } }
        }
      }
    }
  }
}";

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<SearchData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: SearchConnection,
}

#[derive(Debug, Deserialize)]
struct SearchConnection {
    #[serde(default)]
    nodes: Vec<Value>,
}

/// Decodes one search node.
///
/// Issue search results also match issues, which come back as empty objects
/// because the fragment only selects pull request fields. Those are skipped;
/// any other node must be a well-formed pull request.
fn decode_node(node: Value) -> Option<Result<PullRequestRecord, FetchError>> {
    if node.as_object().is_some_and(serde_json::Map::is_empty) {
        return None;
    }
    Some(
        serde_json::from_value(node).map_err(|error| FetchError::Api {
            message: format!("search pull requests returned a malformed node: {error}"),
        }),
    )
}

/// Octocrab-backed search gateway.
pub struct OctocrabSearchGateway {
    client: Octocrab,
}

impl OctocrabSearchGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::Configuration` when the base URI cannot be used
    /// or `ListingError::Fetch` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &ApiBase) -> Result<Self, ListingError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl SearchGateway for OctocrabSearchGateway {
    async fn search_pull_requests(
        &self,
        query: &str,
        limit: SearchLimit,
    ) -> Result<Vec<PullRequestRecord>, FetchError> {
        let payload = json!({
            "query": SEARCH_DOCUMENT,
            "variables": { "first": limit.get(), "query": query },
        });

        let response: GraphQlResponse = self
            .client
            .post(SEARCH_ROUTE, Some(&payload))
            .await
            .map_err(|error| map_octocrab_error("search pull requests", &error))?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .into_iter()
                .map(|error| error.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FetchError::Query { message });
        }

        let data = response.data.ok_or_else(|| FetchError::Api {
            message: "search pull requests returned no data".to_owned(),
        })?;

        data.search
            .nodes
            .into_iter()
            .filter_map(decode_node)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::OctocrabSearchGateway;
    use crate::config::SearchLimit;
    use crate::github::error::FetchError;
    use crate::github::gateway::SearchGateway;
    use crate::github::locator::{ApiBase, PersonalAccessToken};

    async fn gateway_for(server: &MockServer) -> OctocrabSearchGateway {
        let base = ApiBase::parse(&server.uri()).expect("server uri should parse");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        OctocrabSearchGateway::for_token(&token, &base).expect("should create gateway")
    }

    fn limit(value: i64) -> SearchLimit {
        SearchLimit::new(value).expect("limit should be valid")
    }

    #[tokio::test]
    async fn search_posts_query_and_limit_and_keeps_response_order() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer valid-token"))
            .and(body_partial_json(json!({
                "variables": { "first": 2, "query": "is:open is:pr archived:false org:acme" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "search": { "nodes": [
                    {
                        "number": 9,
                        "title": "Later",
                        "url": "https://github.com/acme/widgets/pull/9",
                        "updatedAt": "2024-01-02T00:00:00Z",
                        "isDraft": false,
                        "author": { "login": "al" },
                        "repository": { "nameWithOwner": "acme/widgets" },
                        "commits": { "nodes": [ { "commit": { "statusCheckRollup": { "state": "SUCCESS" } } } ] }
                    },
                    {
                        "number": 4,
                        "title": "Earlier",
                        "url": "https://github.com/acme/gears/pull/4",
                        "updatedAt": "2024-01-01T00:00:00Z",
                        "isDraft": true,
                        "author": null,
                        "repository": { "nameWithOwner": "acme/gears" },
                        "commits": { "nodes": [] }
                    }
                ] } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = gateway
            .search_pull_requests("is:open is:pr archived:false org:acme", limit(2))
            .await
            .expect("search should succeed");

        let numbers: Vec<u64> = records.iter().map(|record| record.number).collect();
        assert_eq!(numbers, vec![9, 4]);
        assert!(records[1].author.is_none());
    }

    #[tokio::test]
    async fn non_pull_request_nodes_are_skipped() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "search": { "nodes": [
                    {},
                    {
                        "number": 1,
                        "title": "Only PR",
                        "url": "https://github.com/acme/widgets/pull/1",
                        "updatedAt": "2024-01-01T00:00:00Z",
                        "isDraft": false,
                        "author": { "login": "al" },
                        "repository": { "nameWithOwner": "acme/widgets" }
                    }
                ] } }
            })))
            .mount(&server)
            .await;

        let records = gateway
            .search_pull_requests("org:acme", limit(10))
            .await
            .expect("search should succeed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Only PR");
    }

    #[tokio::test]
    async fn malformed_pull_request_node_is_an_error() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "search": { "nodes": [
                    {
                        "number": 1,
                        "title": "Bad timestamp",
                        "url": "https://github.com/acme/widgets/pull/1",
                        "updatedAt": "yesterday-ish",
                        "isDraft": false,
                        "author": { "login": "al" },
                        "repository": { "nameWithOwner": "acme/widgets" }
                    }
                ] } }
            })))
            .mount(&server)
            .await;

        let error = gateway
            .search_pull_requests("org:acme", limit(10))
            .await
            .expect_err("malformed node should fail the search");

        assert!(
            matches!(error, FetchError::Api { ref message } if message.contains("malformed node")),
            "expected Api error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn graphql_errors_become_query_errors() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [
                    { "message": "first problem" },
                    { "message": "second problem" }
                ]
            })))
            .mount(&server)
            .await;

        let error = gateway
            .search_pull_requests("org:acme", limit(10))
            .await
            .expect_err("search should fail");

        assert_eq!(
            error,
            FetchError::Query {
                message: "first problem; second problem".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn unauthorised_response_is_an_authentication_error() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/graphql"
            })))
            .mount(&server)
            .await;

        let error = gateway
            .search_pull_requests("org:acme", limit(10))
            .await
            .expect_err("search should fail");

        assert!(
            matches!(error, FetchError::Authentication { ref message } if message.contains("Bad credentials")),
            "expected Authentication error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn rate_limited_response_is_reported_as_such() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server).await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "API rate limit exceeded for user",
                "documentation_url": "https://docs.github.com/rest/rate-limit"
            })))
            .mount(&server)
            .await;

        let error = gateway
            .search_pull_requests("org:acme", limit(10))
            .await
            .expect_err("search should fail");

        assert!(
            matches!(error, FetchError::RateLimitExceeded { .. }),
            "expected RateLimitExceeded error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn enterprise_base_posts_under_api_path() {
        let server = MockServer::start().await;
        let base = ApiBase::parse(&format!("{}/api", server.uri())).expect("base should parse");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        let gateway = OctocrabSearchGateway::for_token(&token, &base).expect("should create gateway");

        Mock::given(method("POST"))
            .and(path("/api/graphql"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "search": { "nodes": [] } } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let records = gateway
            .search_pull_requests("org:acme", limit(5))
            .await
            .expect("search should succeed");

        assert!(records.is_empty());
    }
}
