//! Organisation-wide pull request listing operation.

use std::io::{self, Write};
use std::sync::Arc;

use list_prs::github::SearchGateway;
use list_prs::output::{formatter_for, write_report};
use list_prs::{
    ApiBase, ListPrsConfig, ListingError, ListingRequest, OctocrabSearchGateway,
    PersonalAccessToken, fetch_organisations, tui,
};

/// Lists open pull requests for every organisation in the request.
///
/// # Errors
///
/// Returns [`ListingError::MissingToken`] when no token is configured and
/// any fetch, aggregation, terminal or output error otherwise.
pub async fn run(request: &ListingRequest, config: &ListPrsConfig) -> Result<(), ListingError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(request, config, OctocrabSearchGateway::for_token, &mut stdout).await
}

/// Lists pull requests using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways. The report is
/// written to `writer`; interactive mode takes over the terminal instead.
pub async fn run_with_gateway_builder<G, F, W>(
    request: &ListingRequest,
    config: &ListPrsConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ListingError>
where
    G: SearchGateway + 'static,
    F: FnOnce(&PersonalAccessToken, &ApiBase) -> Result<G, ListingError>,
    W: Write,
{
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;
    let gateway = Arc::new(build_gateway(&token, &api_base)?);

    let options = request.options();
    let repositories = fetch_organisations(gateway, request.organisations(), options).await?;
    tracing::debug!(repositories = repositories.len(), "listing fetched");

    if options.interactive {
        return tui::run(request.title(), repositories).await;
    }

    let formatter = formatter_for(options.no_color, &api_base.web_base());
    write_report(writer, &repositories, formatter.as_ref())
}
