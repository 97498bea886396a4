//! GraphQL request and response envelopes for the review thread lookup.

use serde::{Deserialize, Serialize};

use super::error::CommentsError;
use super::locator::BranchTarget;
use super::models::{ApiConnection, ApiReviewThread};

/// Path of the GraphQL endpoint relative to the API base.
pub(crate) const GRAPHQL_PATH: &str = "/graphql";

/// Looks up the first pull request whose head branch matches `$branch`.
///
/// Threads and comments are capped at 100 each; nothing beyond the first
/// page is requested.
pub const REVIEW_THREADS_QUERY: &str = r"
query($owner: String!, $repo: String!, $branch: String!) {
  repository(owner: $owner, name: $repo) {
    pullRequests(first: 1, headRefName: $branch) {
      nodes {
        reviewThreads(first: 100) {
          nodes {
            isResolved
            comments(first: 100) {
              nodes {
                id
                databaseId
                body
                createdAt
                updatedAt
                path
                position
                originalPosition
                startLine
                line
                commit {
                  oid
                }
                author {
                  login
                }
                diffHunk
              }
            }
          }
        }
      }
    }
  }
}
";

/// JSON body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct ReviewThreadsRequest<'target> {
    query: &'static str,
    variables: ReviewThreadsVariables<'target>,
}

#[derive(Debug, Serialize)]
struct ReviewThreadsVariables<'target> {
    owner: &'target str,
    repo: &'target str,
    branch: &'target str,
}

impl<'target> ReviewThreadsRequest<'target> {
    pub(crate) fn for_target(target: &'target BranchTarget) -> Self {
        Self {
            query: REVIEW_THREADS_QUERY,
            variables: ReviewThreadsVariables {
                owner: target.owner(),
                repo: target.repository(),
                branch: target.branch(),
            },
        }
    }
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewThreadsResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    repository: Option<ApiRepository>,
}

#[derive(Debug, Deserialize)]
struct ApiRepository {
    #[serde(rename = "pullRequests")]
    pull_requests: ApiConnection<ApiPullRequest>,
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    #[serde(rename = "reviewThreads")]
    review_threads: ApiConnection<ApiReviewThread>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl ReviewThreadsResponse {
    /// Extracts the review threads of the first matching pull request.
    ///
    /// Returns `Ok(None)` when no pull request has the requested head branch.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Api`] when the response carries a GraphQL
    /// `errors` list.
    pub(crate) fn into_review_threads(self) -> Result<Option<Vec<ApiReviewThread>>, CommentsError> {
        if let Some(errors) = self.errors {
            let messages: Vec<String> = errors.into_iter().map(|error| error.message).collect();
            return Err(CommentsError::Api {
                message: format!("GraphQL error: {}", messages.join("; ")),
            });
        }

        Ok(self
            .data
            .and_then(|data| data.repository)
            .and_then(|repository| repository.pull_requests.nodes.into_iter().next())
            .map(|pull_request| pull_request.review_threads.nodes))
    }
}
