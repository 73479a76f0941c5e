//! Application configuration loaded from files and the environment.
//!
//! Two pieces make up a run's configuration:
//!
//! - [`ListPrsConfig`]: ambient settings (token, API endpoint) merged with
//!   ortho-config's layered approach.
//! - [`ListingOptions`]: the per-invocation filters taken from the command
//!   line, validated once and immutable afterwards.
//!
//! # Precedence
//!
//! Ambient settings are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.list-prs.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `LIST_PRS_TOKEN`, `LIST_PRS_API_URL`
//!
//! When no token is found in those layers, `GITHUB_TOKEN` and then
//! `GH_TOKEN` are consulted.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_url = "https://ghe.example.com/api/"
//! ```

use std::env;
use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ListingError;
use crate::github::locator::{ApiBase, DEFAULT_API_BASE, PersonalAccessToken};

mod options;

pub use options::{ListingOptions, ListingRequest, SearchLimit};

/// Environment variables consulted, in order, when no token is configured.
const FALLBACK_TOKEN_VARIABLES: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Ambient configuration supporting environment and file sources.
///
/// # Environment Variables
///
/// - `LIST_PRS_TOKEN`, `GITHUB_TOKEN`, or `GH_TOKEN`: Authentication token
/// - `LIST_PRS_API_URL`: GitHub API base (GitHub Enterprise Server)
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "LIST_PRS",
    discovery(
        dotfile_name = ".list-prs.toml",
        config_file_name = "list-prs.toml",
        app_name = "list-prs"
    )
)]
pub struct ListPrsConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - Environment: `LIST_PRS_TOKEN`, `GITHUB_TOKEN` or `GH_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config()]
    pub token: Option<String>,

    /// GitHub API base URL.
    ///
    /// Defaults to `https://api.github.com/`. For GitHub Enterprise Server
    /// use `https://<host>/api/` so that the GraphQL endpoint resolves to
    /// `/api/graphql`.
    #[ortho_config()]
    pub api_url: Option<String>,
}

impl ListPrsConfig {
    /// Loads ambient configuration from files and the environment.
    ///
    /// Command-line flags are owned by the `clap` front end, so only the
    /// program name is handed to ortho-config.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when a configuration file or
    /// environment value cannot be parsed.
    pub fn load_ambient() -> Result<Self, ListingError> {
        Self::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))])
            .map_err(|error| ListingError::configuration(error.to_string()))
    }

    /// Resolves the token from configuration or the fallback environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, ListingError> {
        let value = self
            .token
            .clone()
            .or_else(|| {
                FALLBACK_TOKEN_VARIABLES
                    .iter()
                    .find_map(|name| env::var(name).ok().filter(|value| !value.trim().is_empty()))
            })
            .ok_or(ListingError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Returns the configured API base, or github.com when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when `api_url` is invalid.
    pub fn api_base(&self) -> Result<ApiBase, ListingError> {
        ApiBase::parse(self.api_url.as_deref().unwrap_or(DEFAULT_API_BASE))
    }
}

#[cfg(test)]
mod tests;
