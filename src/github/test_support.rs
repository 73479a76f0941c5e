//! Builders for search records used across unit tests.

use chrono::{TimeZone, Utc};

use super::models::{
    PullRequestRecord, RecordAuthor, RecordCheckRollup, RecordCommit, RecordCommitNode,
    RecordCommits, RecordRepository,
};

/// Builds a non-draft record whose last commit passed its checks.
pub(crate) fn record(repository: &str, number: u64, author: &str) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: format!("Change {number}"),
        url: format!("https://github.com/{repository}/pull/{number}"),
        updated_at: Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
        is_draft: false,
        author: Some(RecordAuthor {
            login: author.to_owned(),
        }),
        repository: RecordRepository {
            name_with_owner: repository.to_owned(),
        },
        commits: Some(RecordCommits {
            nodes: vec![RecordCommitNode {
                commit: RecordCommit {
                    status_check_rollup: Some(RecordCheckRollup {
                        state: Some("SUCCESS".to_owned()),
                    }),
                },
            }],
        }),
    }
}
