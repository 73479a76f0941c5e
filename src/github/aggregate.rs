//! Grouping of search records into repositories.

use std::collections::BTreeMap;

use super::error::ListingError;
use super::models::{PullRequestItem, PullRequestRecord, RepositoryItem};

/// Accumulates pull request items keyed by repository name.
///
/// Items are appended in arrival order; sorting and the duplicate check
/// happen once in [`RepositoryGrouper::finish`]. Grouping results from
/// several searches through one grouper merges repositories that appear in
/// more than one of them.
#[derive(Debug, Default)]
pub struct RepositoryGrouper {
    groups: BTreeMap<String, Vec<PullRequestItem>>,
}

impl RepositoryGrouper {
    /// Creates an empty grouper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalises a raw record and adds it to its repository group.
    pub fn push_record(&mut self, record: PullRequestRecord) {
        self.push_item(PullRequestItem::from(record));
    }

    /// Adds an already normalised item to its repository group.
    pub fn push_item(&mut self, item: PullRequestItem) {
        self.groups
            .entry(item.repository.clone())
            .or_default()
            .push(item);
    }

    /// Adds every pull request of already aggregated repositories.
    pub fn extend_repositories(&mut self, repositories: impl IntoIterator<Item = RepositoryItem>) {
        for repository in repositories {
            for item in repository.pull_requests {
                self.push_item(item);
            }
        }
    }

    /// Sorts each group by number and returns repositories in name order.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::DuplicatePullRequest`] when one repository
    /// holds two items with the same number.
    pub fn finish(self) -> Result<Vec<RepositoryItem>, ListingError> {
        self.groups
            .into_iter()
            .map(|(name, mut pull_requests)| {
                pull_requests.sort_by_key(|item| item.number);
                let duplicate = pull_requests.windows(2).find_map(|pair| match pair {
                    [first, second] if first.number == second.number => Some(first.number),
                    _ => None,
                });
                if let Some(number) = duplicate {
                    return Err(ListingError::DuplicatePullRequest {
                        repository: name,
                        number,
                    });
                }
                Ok(RepositoryItem {
                    name,
                    pull_requests,
                })
            })
            .collect()
    }
}

/// Groups one search response in a single step.
///
/// # Errors
///
/// Returns [`ListingError::DuplicatePullRequest`] when the response repeats
/// a pull request.
pub fn aggregate_records(
    records: impl IntoIterator<Item = PullRequestRecord>,
) -> Result<Vec<RepositoryItem>, ListingError> {
    let mut grouper = RepositoryGrouper::new();
    for record in records {
        grouper.push_record(record);
    }
    grouper.finish()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RepositoryGrouper, aggregate_records};
    use crate::github::error::ListingError;
    use crate::github::test_support::record;

    #[test]
    fn records_are_grouped_and_sorted() {
        let repositories = aggregate_records(vec![
            record("a/z", 2, "al"),
            record("a/b", 7, "bo"),
            record("a/z", 1, "cy"),
            record("a/b", 3, "al"),
        ])
        .expect("aggregation should succeed");

        let shape: Vec<(&str, Vec<u64>)> = repositories
            .iter()
            .map(|repository| {
                (
                    repository.name.as_str(),
                    repository.pull_requests.iter().map(|item| item.number).collect(),
                )
            })
            .collect();
        assert_eq!(shape, vec![("a/b", vec![3, 7]), ("a/z", vec![1, 2])]);
    }

    #[test]
    fn empty_input_yields_no_repositories() {
        let repositories = aggregate_records(Vec::new()).expect("aggregation should succeed");
        assert!(repositories.is_empty());
    }

    #[rstest]
    #[case::adjacent(vec![("a/b", 5), ("a/b", 5)])]
    #[case::separated(vec![("a/b", 5), ("a/c", 1), ("a/b", 2), ("a/b", 5)])]
    fn duplicate_numbers_in_one_repository_are_rejected(#[case] entries: Vec<(&str, u64)>) {
        let records = entries
            .into_iter()
            .map(|(repository, number)| record(repository, number, "al"));

        assert_eq!(
            aggregate_records(records),
            Err(ListingError::DuplicatePullRequest {
                repository: "a/b".to_owned(),
                number: 5
            })
        );
    }

    #[test]
    fn same_number_in_different_repositories_is_allowed() {
        let repositories = aggregate_records(vec![record("a/b", 1, "al"), record("a/c", 1, "al")])
            .expect("aggregation should succeed");
        assert_eq!(repositories.len(), 2);
    }

    #[test]
    fn grouper_merges_repositories_across_batches() {
        let first = aggregate_records(vec![record("shared/repo", 4, "al")])
            .expect("aggregation should succeed");
        let second = aggregate_records(vec![record("shared/repo", 2, "bo"), record("other/repo", 1, "cy")])
            .expect("aggregation should succeed");

        let mut grouper = RepositoryGrouper::new();
        grouper.extend_repositories(second);
        grouper.extend_repositories(first);
        let merged = grouper.finish().expect("merge should succeed");

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "other/repo");
        assert_eq!(merged[1].name, "shared/repo");
        let numbers: Vec<u64> = merged[1].pull_requests.iter().map(|item| item.number).collect();
        assert_eq!(numbers, vec![2, 4]);
    }
}
