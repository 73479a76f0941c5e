//! Data models for search records and the normalised listing items.
//!
//! [`PullRequestRecord`] mirrors the GraphQL search result shape. It is
//! converted into an immutable [`PullRequestItem`] by the aggregator, and
//! items are grouped under a [`RepositoryItem`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Login shown for pull requests whose author account no longer exists.
pub const GHOST_LOGIN: &str = "ghost";

/// Raw pull request record returned by the search boundary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRecord {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// HTML URL of the pull request.
    pub url: String,
    /// Last update instant.
    pub updated_at: DateTime<Utc>,
    /// Whether the pull request is a draft.
    pub is_draft: bool,
    /// Author, absent when the account was deleted.
    pub author: Option<RecordAuthor>,
    /// Owning repository.
    pub repository: RecordRepository,
    /// Most recent commit (`commits(last: 1)`).
    #[serde(default)]
    pub commits: Option<RecordCommits>,
}

/// Author part of a [`PullRequestRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordAuthor {
    /// Author login handle.
    pub login: String,
}

/// Repository part of a [`PullRequestRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRepository {
    /// Full `owner/name` identity.
    pub name_with_owner: String,
}

/// Commit history part of a [`PullRequestRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecordCommits {
    /// Commit entries, at most one.
    #[serde(default)]
    pub nodes: Vec<RecordCommitNode>,
}

/// A single commit entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordCommitNode {
    /// The commit itself.
    pub commit: RecordCommit,
}

/// Commit fields used for check status derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCommit {
    /// Aggregate check status; absent when no checks were reported.
    #[serde(default)]
    pub status_check_rollup: Option<RecordCheckRollup>,
}

/// Check rollup of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecordCheckRollup {
    /// Rollup state such as `SUCCESS` or `FAILURE`.
    #[serde(default)]
    pub state: Option<String>,
}

/// Latest-commit check status of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// All checks passed.
    Success,
    /// At least one check failed or errored.
    Failure,
    /// Checks are running or have not reported yet.
    Pending,
    /// No commit history was available.
    Unknown,
}

impl CheckStatus {
    /// Derives the status from the record's commit history.
    ///
    /// No commit entries, or a commit without a rollup (a repository with
    /// no checks), yields `Unknown`. A rollup whose state is absent yields
    /// `Pending`.
    #[must_use]
    pub fn from_last_commit(commits: Option<&RecordCommits>) -> Self {
        commits
            .and_then(|history| history.nodes.last())
            .and_then(|last| last.commit.status_check_rollup.as_ref())
            .map_or(Self::Unknown, |rollup| {
                rollup.state.as_deref().map_or(Self::Pending, Self::from_state)
            })
    }

    /// Maps a GitHub `StatusState` value onto a status.
    ///
    /// Besides `SUCCESS`, `FAILURE`, `PENDING` and the empty state, `ERROR`
    /// is treated as a failure and `EXPECTED` as pending so that those
    /// commits still show a symbol. Unrecognised states render empty.
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        match state {
            "SUCCESS" => Self::Success,
            "FAILURE" | "ERROR" => Self::Failure,
            "" | "PENDING" | "EXPECTED" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// Returns the unstyled status symbol, empty for `Unknown`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Failure => "✘",
            Self::Pending => "⏳",
            Self::Unknown => "",
        }
    }
}

/// Normalised, immutable pull request item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestItem {
    /// Repository full name (`owner/name`).
    pub repository: String,
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// Author login.
    pub author: String,
    /// Last update instant, converted to local time when rendered.
    pub updated_at: DateTime<Utc>,
    /// Whether the pull request is a draft.
    pub is_draft: bool,
    /// HTML URL of the pull request.
    pub url: String,
    /// Latest-commit check status.
    pub check_status: CheckStatus,
}

impl From<PullRequestRecord> for PullRequestItem {
    fn from(value: PullRequestRecord) -> Self {
        let check_status = CheckStatus::from_last_commit(value.commits.as_ref());
        Self {
            repository: value.repository.name_with_owner,
            number: value.number,
            title: value.title,
            author: value
                .author
                .map_or_else(|| GHOST_LOGIN.to_owned(), |author| author.login),
            updated_at: value.updated_at,
            is_draft: value.is_draft,
            url: value.url,
            check_status,
        }
    }
}

/// Pull requests grouped under one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    /// Repository full name (`owner/name`).
    pub name: String,
    /// Pull requests, ascending by number.
    pub pull_requests: Vec<PullRequestItem>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    use super::{CheckStatus, PullRequestItem, PullRequestRecord};

    fn record_with_commits(commits: serde_json::Value) -> PullRequestRecord {
        serde_json::from_value(json!({
            "number": 123,
            "title": "Fix bug",
            "url": "https://github.com/test/repo/pull/123",
            "updatedAt": "2024-11-30T12:00:00Z",
            "isDraft": false,
            "author": { "login": "alice" },
            "repository": { "nameWithOwner": "test/repo" },
            "commits": commits
        }))
        .expect("record should deserialise")
    }

    #[rstest]
    #[case::success(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": "SUCCESS"}}}]}), CheckStatus::Success)]
    #[case::failure(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": "FAILURE"}}}]}), CheckStatus::Failure)]
    #[case::rollup_without_state(json!({"nodes": [{"commit": {"statusCheckRollup": {}}}]}), CheckStatus::Pending)]
    #[case::rollup_with_empty_state(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": ""}}}]}), CheckStatus::Pending)]
    #[case::rollup_with_null_state(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": null}}}]}), CheckStatus::Pending)]
    #[case::null_rollup(json!({"nodes": [{"commit": {"statusCheckRollup": null}}]}), CheckStatus::Unknown)]
    #[case::commit_without_rollup_field(json!({"nodes": [{"commit": {}}]}), CheckStatus::Unknown)]
    #[case::error_state(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": "ERROR"}}}]}), CheckStatus::Failure)]
    #[case::expected_state(json!({"nodes": [{"commit": {"statusCheckRollup": {"state": "EXPECTED"}}}]}), CheckStatus::Pending)]
    #[case::no_commits(json!({"nodes": []}), CheckStatus::Unknown)]
    #[case::null_commits(serde_json::Value::Null, CheckStatus::Unknown)]
    fn check_status_is_derived_from_last_commit(
        #[case] commits: serde_json::Value,
        #[case] expected: CheckStatus,
    ) {
        let item = PullRequestItem::from(record_with_commits(commits));
        assert_eq!(item.check_status, expected);
    }

    #[test]
    fn record_converts_into_item() {
        let item = PullRequestItem::from(record_with_commits(json!({"nodes": []})));

        assert_eq!(item.repository, "test/repo");
        assert_eq!(item.number, 123);
        assert_eq!(item.title, "Fix bug");
        assert_eq!(item.author, "alice");
        assert_eq!(item.url, "https://github.com/test/repo/pull/123");
        assert!(!item.is_draft);
        assert_eq!(
            item.updated_at,
            Utc.with_ymd_and_hms(2024, 11, 30, 12, 0, 0)
                .single()
                .expect("valid timestamp")
        );
    }

    #[test]
    fn deleted_author_becomes_ghost() {
        let record: PullRequestRecord = serde_json::from_value(json!({
            "number": 1,
            "title": "Orphaned",
            "url": "https://github.com/test/repo/pull/1",
            "updatedAt": "2024-11-30T12:00:00Z",
            "isDraft": true,
            "author": null,
            "repository": { "nameWithOwner": "test/repo" }
        }))
        .expect("record should deserialise");

        let item = PullRequestItem::from(record);
        assert_eq!(item.author, "ghost");
        assert_eq!(item.check_status, CheckStatus::Unknown);
    }

    #[rstest]
    #[case::success(CheckStatus::Success, "✔")]
    #[case::failure(CheckStatus::Failure, "✘")]
    #[case::pending(CheckStatus::Pending, "⏳")]
    #[case::unknown(CheckStatus::Unknown, "")]
    fn symbols_match_status(#[case] status: CheckStatus, #[case] symbol: &str) {
        assert_eq!(status.symbol(), symbol);
    }
}
