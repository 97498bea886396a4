//! Octocrab implementation of the review thread gateway.

use std::time::Duration;

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;

use crate::github::error::CommentsError;
use crate::github::locator::{BranchTarget, PersonalAccessToken};
use crate::github::models::ApiReviewThread;
use crate::github::query::{GRAPHQL_PATH, ReviewThreadsRequest, ReviewThreadsResponse};

use super::ReviewThreadGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::extract_github_message;

const OPERATION: &str = "review threads";

/// Gateway that posts the review thread query through Octocrab.
pub struct OctocrabReviewThreadGateway {
    client: Octocrab,
}

impl OctocrabReviewThreadGateway {
    /// Creates a gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the given token and API base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token for authentication.
    /// * `api_base` - Base URL for the GitHub API (e.g. `https://api.github.com`).
    /// * `timeout` - Optional connect and read timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the Octocrab client cannot be built.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, CommentsError> {
        let client = build_octocrab_client(token, api_base, timeout)?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl ReviewThreadGateway for OctocrabReviewThreadGateway {
    async fn review_threads(
        &self,
        target: &BranchTarget,
    ) -> Result<Option<Vec<ApiReviewThread>>, CommentsError> {
        let uri: Uri = GRAPHQL_PATH
            .parse::<Uri>()
            .map_err(|error| CommentsError::Configuration {
                message: format!("invalid GraphQL path: {error}"),
            })?;
        let request = ReviewThreadsRequest::for_target(target);

        tracing::debug!(
            owner = target.owner(),
            repo = target.repository(),
            branch = target.branch(),
            "posting review thread query"
        );

        let response = self
            .client
            ._post(uri, Some(&request))
            .await
            .map_err(|error| map_octocrab_error(OPERATION, &error))?;
        let status = response.status();

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| CommentsError::Network {
                message: format!("{OPERATION} response read failed: {error}"),
            })?;

        tracing::debug!(%status, bytes = body.len(), "received review thread response");

        if !status.is_success() {
            return Err(map_http_error(
                OPERATION,
                status,
                extract_github_message(&body),
            ));
        }

        let parsed: ReviewThreadsResponse =
            serde_json::from_str(&body).map_err(|error| CommentsError::Decode {
                message: format!("{OPERATION} response deserialisation failed: {error}"),
            })?;

        parsed.into_review_threads()
    }
}
