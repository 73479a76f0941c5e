//! Per-invocation listing options.

use crate::github::error::ListingError;

/// Default number of search results requested per organisation.
pub const DEFAULT_LIMIT: u32 = 50;

/// Maximum number of search results requested per organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchLimit(u32);

impl SearchLimit {
    /// Validates a limit taken from user input.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when the value is zero,
    /// negative, or too large to represent.
    pub fn new(value: i64) -> Result<Self, ListingError> {
        if value <= 0 {
            return Err(ListingError::configuration(format!(
                "limit must be a positive integer, got {value}"
            )));
        }
        u32::try_from(value).map(Self).map_err(|_| {
            ListingError::configuration(format!("limit {value} is too large"))
        })
    }

    /// Returns the limit value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for SearchLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

/// Filters and presentation flags shared by every organisation in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Maximum results per organisation.
    pub limit: SearchLimit,
    /// Repositories to leave out, each `name` or `owner/name`.
    pub excludes: Vec<String>,
    /// Restrict results to this author login.
    pub author: Option<String>,
    /// Raw search clauses appended in order.
    pub additional_queries: Vec<String>,
    /// Log the built queries.
    pub verbose: bool,
    /// Browse results interactively instead of printing a report.
    pub interactive: bool,
    /// Print the report without styling.
    pub no_color: bool,
}

impl ListingOptions {
    /// Creates options with the given limit and no filters.
    #[must_use]
    pub fn new(limit: SearchLimit) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

/// Validated request: organisations to search plus the options to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    organisations: Vec<String>,
    options: ListingOptions,
}

impl ListingRequest {
    /// Builds a request, dropping repeated organisations while keeping the
    /// first occurrence of each.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when no non-blank
    /// organisation is given.
    pub fn new<I, S>(organisations: I, options: ListingOptions) -> Result<Self, ListingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for organisation in organisations {
            let organisation = organisation.into().trim().to_owned();
            if !organisation.is_empty() && !unique.contains(&organisation) {
                unique.push(organisation);
            }
        }

        if unique.is_empty() {
            return Err(ListingError::configuration(
                "at least one organisation is required",
            ));
        }

        Ok(Self {
            organisations: unique,
            options,
        })
    }

    /// Organisations in first-seen order.
    #[must_use]
    pub fn organisations(&self) -> &[String] {
        &self.organisations
    }

    /// Options shared by every organisation.
    #[must_use]
    pub const fn options(&self) -> &ListingOptions {
        &self.options
    }

    /// Title of the interactive list.
    #[must_use]
    pub fn title(&self) -> String {
        match self.organisations.as_slice() {
            [single] => format!("PRs in {single}"),
            many => format!("PRs in {} orgs", many.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ListingOptions, ListingRequest, SearchLimit};
    use crate::github::error::ListingError;

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    #[case::too_large(i64::from(u32::MAX) + 1)]
    fn invalid_limits_are_configuration_errors(#[case] raw: i64) {
        let result = SearchLimit::new(raw);
        assert!(
            matches!(result, Err(ListingError::Configuration { .. })),
            "expected Configuration error, got {result:?}"
        );
    }

    #[rstest]
    #[case(1)]
    #[case(50)]
    #[case(1000)]
    fn positive_limits_are_kept(#[case] raw: i64) {
        let limit = SearchLimit::new(raw).expect("limit should be valid");
        assert_eq!(i64::from(limit.get()), raw);
    }

    #[test]
    fn default_limit_is_fifty() {
        assert_eq!(ListingOptions::default().limit.get(), 50);
    }

    #[test]
    fn request_deduplicates_in_first_seen_order() {
        let request = ListingRequest::new(["beta", "alpha", "beta", " alpha "], ListingOptions::default())
            .expect("request should be valid");

        assert_eq!(request.organisations(), ["beta", "alpha"]);
    }

    #[rstest]
    #[case::none(Vec::new())]
    #[case::blank(vec!["  "])]
    fn request_without_organisations_is_rejected(#[case] organisations: Vec<&str>) {
        let result = ListingRequest::new(organisations, ListingOptions::default());
        assert!(
            matches!(result, Err(ListingError::Configuration { .. })),
            "expected Configuration error, got {result:?}"
        );
    }

    #[rstest]
    #[case::single(vec!["acme"], "PRs in acme")]
    #[case::several(vec!["acme", "globex", "initech"], "PRs in 3 orgs")]
    fn title_reflects_organisation_count(#[case] organisations: Vec<&str>, #[case] expected: &str) {
        let request =
            ListingRequest::new(organisations, ListingOptions::default()).expect("request should be valid");
        assert_eq!(request.title(), expected);
    }
}
