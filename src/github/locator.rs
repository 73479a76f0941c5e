//! Identity wrappers for the GitHub endpoint and credentials.

use url::Url;

use super::error::ListingError;

/// Default GitHub API base used when no `api_url` is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com/";

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ListingError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ListingError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// GitHub API endpoint the GraphQL search is posted to.
///
/// `https://api.github.com/` for github.com, `https://<host>/api/` for
/// GitHub Enterprise Server (GraphQL lives at `/api/graphql` there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base URL, normalising it to end with a slash so that
    /// relative routes are joined beneath it.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::Configuration` when the value is not an
    /// absolute http(s) URL.
    pub fn parse(value: &str) -> Result<Self, ListingError> {
        let mut url = Url::parse(value.trim())
            .map_err(|error| ListingError::configuration(format!("invalid api_url: {error}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ListingError::configuration(format!(
                "api_url must use http or https, got `{}`",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self(url))
    }

    /// Borrow the API base as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the web root that repository pages live under.
    ///
    /// `api.github.com` maps to `https://github.com`; any other host keeps
    /// its scheme, host and port and drops the API path.
    #[must_use]
    pub fn web_base(&self) -> String {
        match self.0.host_str() {
            Some(host) if host.eq_ignore_ascii_case("api.github.com") => {
                "https://github.com".to_owned()
            }
            Some(host) => match self.0.port() {
                Some(port) => format!("{}://{host}:{port}", self.0.scheme()),
                None => format!("{}://{host}", self.0.scheme()),
            },
            None => "https://github.com".to_owned(),
        }
    }
}
