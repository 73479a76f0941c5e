//! Search query construction.

use crate::config::ListingOptions;

/// Builds the GitHub search query for one organisation.
///
/// The query always starts with `is:open is:pr archived:false org:<org>`,
/// followed by one `-repo:` clause per exclusion, the author filter when set,
/// and finally the raw additional clauses in the order given. Clauses are
/// passed through without reordering or deduplication.
///
/// When `options.verbose` is set the query is logged at `info` level.
#[must_use]
pub fn build_search_query(organisation: &str, options: &ListingOptions) -> String {
    let mut clauses = vec![
        "is:open".to_owned(),
        "is:pr".to_owned(),
        "archived:false".to_owned(),
        format!("org:{organisation}"),
    ];

    clauses.extend(
        options
            .excludes
            .iter()
            .map(|exclude| exclusion_clause(organisation, exclude)),
    );

    if let Some(author) = options.author.as_deref() {
        clauses.push(format!("author:{author}"));
    }

    clauses.extend(options.additional_queries.iter().cloned());

    let query = clauses.join(" ");
    if options.verbose {
        tracing::info!("query: {query}");
    }
    query
}

/// Qualifies a bare repository name with the organisation; tokens already
/// carrying an owner are used verbatim.
fn exclusion_clause(organisation: &str, exclude: &str) -> String {
    if exclude.contains('/') {
        format!("-repo:{exclude}")
    } else {
        format!("-repo:{organisation}/{exclude}")
    }
}
