//! List open pull requests across one or more GitHub organisations.
//!
//! The library searches each organisation through the GitHub GraphQL API,
//! groups the matching pull requests by repository and renders them either
//! as a column-aligned report or as an interactive terminal list.

pub mod config;
pub mod github;
pub mod output;
pub mod tui;

pub use config::{ListPrsConfig, ListingOptions, ListingRequest, SearchLimit};
pub use github::{
    ApiBase, CheckStatus, FetchError, ListingError, OctocrabSearchGateway, PersonalAccessToken,
    PullRequestItem, RepositoryItem, fetch_organisations,
};
