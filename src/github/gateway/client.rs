//! Octocrab client construction for the GraphQL gateway.

use std::time::Duration;

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::CommentsError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an authenticated Octocrab client for the given API base URL.
///
/// Retries are disabled so each invocation issues exactly one request.
/// `timeout` bounds both connecting and reading; `None` leaves them unbounded.
///
/// # Errors
///
/// Returns `CommentsError::Configuration` when the base URI cannot be parsed
/// or `CommentsError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
    timeout: Option<Duration>,
) -> Result<Octocrab, CommentsError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| CommentsError::Configuration {
            message: format!("invalid API base URL '{api_base}': {error}"),
        })?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(timeout)
        .set_read_timeout(timeout)
        .base_uri(base_uri)
        .map_err(|error| CommentsError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
