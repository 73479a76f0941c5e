//! `list-prs` entrypoint: lists open pull requests for GitHub organisations.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use list_prs::{ListPrsConfig, ListingError};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ListingError> {
    let request = cli.into_request()?;
    let config = ListPrsConfig::load_ambient()?;
    cli::listing::run(&request, &config).await
}

/// Logs to stderr so the report on stdout stays clean. `RUST_LOG` wins over
/// the `--verbose` default.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "warn,list_prs=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
