//! Gateways for loading review threads from the GitHub GraphQL API.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod review_threads;

pub use review_threads::OctocrabReviewThreadGateway;

use async_trait::async_trait;

use crate::github::error::CommentsError;
use crate::github::locator::BranchTarget;
use crate::github::models::ApiReviewThread;

/// Gateway that can load the review threads of a branch's pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewThreadGateway: Send + Sync {
    /// Fetch the review threads of the first pull request whose head branch
    /// matches the target.
    ///
    /// Returns `Ok(None)` when no pull request exists for the branch.
    async fn review_threads(
        &self,
        target: &BranchTarget,
    ) -> Result<Option<Vec<ApiReviewThread>>, CommentsError>;
}
