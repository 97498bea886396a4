//! Data models for review threads and normalised review comments.
//!
//! Types prefixed with `Api` mirror the GraphQL response shape and are only
//! used as deserialisation targets. [`ReviewComment`] is the flattened record
//! handed to the presenter.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GraphQL connection wrapper exposing its `nodes` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiConnection<T> {
    /// Nodes returned for the requested page.
    #[serde(default)]
    pub nodes: Vec<T>,
}

/// A review thread as returned by the GraphQL API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReviewThread {
    /// Whether the discussion has been marked resolved.
    pub is_resolved: bool,
    /// Comments in the thread, oldest first.
    pub comments: ApiConnection<ApiThreadComment>,
}

/// A single pull request review comment inside a thread.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiThreadComment {
    /// Opaque GraphQL node identifier.
    pub id: String,
    /// Numeric REST identifier, when GitHub exposes one.
    pub database_id: Option<u64>,
    /// Markdown body.
    pub body: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
    /// File the comment is anchored to.
    pub path: Option<String>,
    /// Position in the current diff.
    pub position: Option<u32>,
    /// Position in the diff the comment was written against.
    pub original_position: Option<u32>,
    /// First line of a multi-line comment.
    pub start_line: Option<u32>,
    /// Last (or only) line of the comment.
    pub line: Option<u32>,
    /// Commit the comment was made on.
    pub commit: Option<ApiCommit>,
    /// Comment author; absent for deleted accounts.
    pub author: Option<ApiActor>,
    /// Diff context around the anchor.
    pub diff_hunk: Option<String>,
}

/// Commit reference attached to a review comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiCommit {
    /// Commit SHA.
    pub oid: String,
}

/// Comment author.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiActor {
    /// Account login.
    pub login: String,
}

/// Unresolved review comment ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment {
    /// Opaque GraphQL node identifier.
    pub id: String,
    /// Numeric identifier, when GitHub exposes one.
    pub database_id: Option<u64>,
    /// Markdown body.
    pub body: String,
    /// Author login (`ghost` for deleted accounts).
    pub author_login: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last edit time.
    pub updated_at: DateTime<Utc>,
    /// File the comment is anchored to.
    pub path: Option<String>,
    /// Diff position: current position, else the original one.
    pub line: Option<u32>,
    /// First line of a multi-line comment.
    pub start_line: Option<u32>,
    /// Last line of a multi-line comment.
    pub end_line: Option<u32>,
    /// Commit SHA the comment was made on.
    pub commit_id: Option<String>,
    /// Diff context around the anchor.
    pub diff_hunk: Option<String>,
    /// Always `false`; resolved threads never reach this type.
    pub is_resolved: bool,
}
