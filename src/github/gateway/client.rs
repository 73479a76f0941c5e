//! Octocrab client construction for the search gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::{FetchError, ListingError};
use crate::github::locator::{ApiBase, PersonalAccessToken};

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `ListingError::Configuration` when the base URI cannot be used
/// and `ListingError::Fetch` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &ApiBase,
) -> Result<Octocrab, ListingError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| ListingError::configuration(format!("invalid api_url: {error}")))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ListingError::configuration(format!("invalid api_url: {error}")))?
        .build()
        .map_err(|error| {
            ListingError::Fetch(FetchError::Api {
                message: format!("build client failed: {error}"),
            })
        })
}
