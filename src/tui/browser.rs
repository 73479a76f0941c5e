//! Opening URLs in the system's default browser.

use std::io;

/// Launches the browser for `url` without waiting for it to exit.
///
/// Failures are logged and otherwise ignored so the list stays usable.
pub fn open_url(url: &str) {
    launch_with(url, |target| open::that_detached(target));
}

/// Runs `opener` for `url` and logs the outcome.
///
/// Returns whether the launch succeeded.
fn launch_with<F>(url: &str, opener: F) -> bool
where
    F: FnOnce(&str) -> io::Result<()>,
{
    match opener(url) {
        Ok(()) => {
            tracing::debug!(url, "browser launched");
            true
        }
        Err(error) => {
            tracing::warn!(url, %error, "failed to open URL in browser");
            false
        }
    }
}
