//! GitHub review thread retrieval and normalisation.
//!
//! This module posts a single GraphQL query for the pull request whose head
//! branch matches the local branch, drops resolved review threads, and
//! flattens the remaining comments. Errors are mapped into [`CommentsError`]
//! variants so callers can tell failure kinds apart without seeing Octocrab
//! internals.

pub mod error;
pub mod fetch;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod normalize;
mod query;

pub use error::{AUTH_GUIDANCE, CommentsError};
pub use fetch::{
    DEFAULT_API_BASE, FetchSettings, ReviewCommentIntake, fetch_comments, locate_branch,
};
pub use gateway::{OctocrabReviewThreadGateway, ReviewThreadGateway};
pub use locator::{BranchTarget, PersonalAccessToken};
pub use models::{ApiReviewThread, ApiThreadComment, ReviewComment};
pub use normalize::normalize_threads;
pub use query::REVIEW_THREADS_QUERY;

#[cfg(test)]
pub use gateway::MockReviewThreadGateway;
