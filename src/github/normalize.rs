//! Flattening of review threads into displayable comments.

use super::models::{ApiReviewThread, ApiThreadComment, ReviewComment};

/// Login GitHub shows for comments whose author account was deleted.
pub const GHOST_LOGIN: &str = "ghost";

/// Drops resolved threads and flattens the rest into [`ReviewComment`]s.
///
/// Output order follows thread order, then comment order within each thread.
/// No deduplication or sorting is applied.
#[must_use]
pub fn normalize_threads(threads: Vec<ApiReviewThread>) -> Vec<ReviewComment> {
    threads
        .into_iter()
        .filter(|thread| !thread.is_resolved)
        .flat_map(|thread| thread.comments.nodes)
        .map(ReviewComment::from)
        .collect()
}

impl From<ApiThreadComment> for ReviewComment {
    fn from(value: ApiThreadComment) -> Self {
        let line = value.position.or(value.original_position);
        // GraphQL reports `line` as the end of a range only when `startLine` is set
        let end_line = value.start_line.and(value.line);

        Self {
            id: value.id,
            database_id: value.database_id,
            body: value.body,
            author_login: value
                .author
                .map_or_else(|| GHOST_LOGIN.to_owned(), |author| author.login),
            created_at: value.created_at,
            updated_at: value.updated_at,
            path: value.path,
            line,
            start_line: value.start_line,
            end_line,
            commit_id: value.commit.map(|commit| commit.oid),
            diff_hunk: value.diff_hunk,
            is_resolved: false,
        }
    }
}
