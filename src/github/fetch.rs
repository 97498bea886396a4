//! High-level review comment fetch used by the CLI.

use std::path::Path;
use std::time::Duration;

use crate::local::{GitMetadata, parse_repo_path};

use super::error::CommentsError;
use super::gateway::{OctocrabReviewThreadGateway, ReviewThreadGateway};
use super::locator::{BranchTarget, PersonalAccessToken};
use super::models::ReviewComment;
use super::normalize::normalize_threads;

/// Public GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Explicit settings for talking to GitHub.
///
/// Built once from configuration and threaded into the fetch so nothing reads
/// the process environment mid-pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Personal access token, if one was configured.
    pub token: Option<String>,
    /// API base URL; the GraphQL endpoint is `<api_base>/graphql`.
    pub api_base: String,
    /// Optional connect and read timeout for the HTTP call.
    pub timeout: Option<Duration>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout: None,
        }
    }
}

/// Loads unresolved review comments through a gateway.
pub struct ReviewCommentIntake<'client, Gateway>
where
    Gateway: ReviewThreadGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ReviewCommentIntake<'client, Gateway>
where
    Gateway: ReviewThreadGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load the unresolved comments of the target branch's pull request.
    ///
    /// A branch without a pull request yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn load(&self, target: &BranchTarget) -> Result<Vec<ReviewComment>, CommentsError> {
        let Some(threads) = self.client.review_threads(target).await? else {
            tracing::debug!(branch = target.branch(), "no pull request for branch");
            return Ok(Vec::new());
        };

        Ok(normalize_threads(threads))
    }
}

/// Reads the current branch and origin remote of `directory`.
///
/// # Errors
///
/// Returns [`CommentsError::GitUnavailable`] when Git metadata cannot be read
/// and [`CommentsError::InvalidRemote`] when the origin URL does not name an
/// `owner/repo` pair.
pub fn locate_branch<Git>(git: &Git, directory: &Path) -> Result<BranchTarget, CommentsError>
where
    Git: GitMetadata + ?Sized,
{
    let branch = git.current_branch(directory)?;
    let remote_url = git.remote_url(directory)?;
    let identity = parse_repo_path(&remote_url)?;

    if !identity.is_github_com() {
        tracing::warn!(
            host = identity.host(),
            "origin is not github.com; querying the configured API base"
        );
    }
    tracing::debug!(
        owner = identity.owner(),
        repo = identity.repository(),
        branch = branch.as_str(),
        "resolved branch target"
    );

    Ok(BranchTarget::new(identity, branch))
}

/// Fetches the unresolved review comments for the branch checked out in
/// `directory`.
///
/// Steps run strictly in order: branch lookup, remote lookup, token check,
/// one GraphQL request, normalisation. A missing token fails before any
/// request is made.
///
/// # Errors
///
/// Returns the [`CommentsError`] variant matching the failing step.
pub async fn fetch_comments<Git>(
    directory: &Path,
    git: &Git,
    settings: &FetchSettings,
) -> Result<Vec<ReviewComment>, CommentsError>
where
    Git: GitMetadata + ?Sized,
{
    let target = locate_branch(git, directory)?;
    let token = PersonalAccessToken::from_configured(settings.token.as_deref())?;
    let gateway =
        OctocrabReviewThreadGateway::for_token(&token, &settings.api_base, settings.timeout)?;

    ReviewCommentIntake::new(&gateway).load(&target).await
}
