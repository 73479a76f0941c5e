//! Terminal User Interface for browsing pull requests.
//!
//! This module provides an interactive list of the fetched pull requests
//! using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::PullRequestApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `handle_message()`
//!
//! # Modules
//!
//! - [`app`]: Main application model
//! - [`messages`]: Message and effect types for the update loop
//! - [`state`]: Filter and cursor state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//! - [`browser`]: System browser launcher
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, initial data is handed over through module-level storage.
//! [`run`] stores it before starting the program, and
//! `PullRequestApp::init()` retrieves it.

use std::io::{self, Write};
use std::sync::OnceLock;

use bubbletea_rs::Program;

use crate::github::error::ListingError;
use crate::github::models::{PullRequestItem, RepositoryItem};

pub mod app;
pub mod browser;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::PullRequestApp;
pub use messages::{AppEffect, AppMsg};

/// Title and items shown when the program starts.
static INITIAL_LISTING: OnceLock<(String, Vec<PullRequestItem>)> = OnceLock::new();

/// Sets the initial listing for the TUI application.
///
/// Returns `true` if the listing was set, `false` if it was already set.
#[must_use]
pub fn set_initial_listing(title: String, items: Vec<PullRequestItem>) -> bool {
    INITIAL_LISTING.set((title, items)).is_ok()
}

/// Gets a clone of the initial listing, or an empty untitled one if unset.
pub(crate) fn get_initial_listing() -> (String, Vec<PullRequestItem>) {
    INITIAL_LISTING.get().cloned().unwrap_or_default()
}

/// Flattens aggregated repositories into list order.
#[must_use]
pub fn flatten_repositories(repositories: Vec<RepositoryItem>) -> Vec<PullRequestItem> {
    repositories
        .into_iter()
        .flat_map(|repository| repository.pull_requests)
        .collect()
}

/// Runs the interactive list until the user quits.
///
/// # Errors
///
/// Returns [`ListingError::Terminal`] when the terminal program fails.
pub async fn run(title: String, repositories: Vec<RepositoryItem>) -> Result<(), ListingError> {
    if !set_initial_listing(title, flatten_repositories(repositories)) {
        tracing::debug!("initial listing already set, keeping the existing data");
    }

    run_program().await.map_err(|error| ListingError::Terminal {
        message: error.to_string(),
    })?;

    io::stdout().flush()?;
    Ok(())
}

async fn run_program() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<PullRequestApp>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
