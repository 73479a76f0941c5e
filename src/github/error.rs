//! Error types exposed by the listing pipeline.

use thiserror::Error;

/// Failures reported by the search boundary.
///
/// The message carried by each variant is the detail GitHub (or the
/// transport) returned, so it can be shown to the user unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// The GraphQL document was accepted but the search reported errors.
    #[error("search query failed: {message}")]
    Query {
        /// Messages from the GraphQL `errors` array, joined with `; `.
        message: String,
    },
}

/// Errors surfaced to the top-level caller of a listing run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    /// Invalid options or configuration, detected before any network call.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required (set LIST_PRS_TOKEN, GITHUB_TOKEN or GH_TOKEN)")]
    MissingToken,

    /// A search against one organisation failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Two records in one repository carried the same pull request number.
    #[error("duplicate pull request #{number} in {repository}")]
    DuplicatePullRequest {
        /// Repository full name (`owner/name`).
        repository: String,
        /// The repeated pull request number.
        number: u64,
    },

    /// A concurrent fetch task panicked or was cancelled.
    #[error("fetch task failed: {message}")]
    Task {
        /// Join error detail.
        message: String,
    },

    /// Writing the report failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The interactive terminal program failed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl ListingError {
    /// Builds a [`ListingError::Configuration`] from any displayable message.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ListingError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
