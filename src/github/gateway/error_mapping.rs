//! Error mapping helpers for the Octocrab GraphQL gateway.

use std::fmt::Display;

use http::StatusCode;

use crate::github::error::CommentsError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> CommentsError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    let summary = headline(error);
    if is_network_error(error) {
        return CommentsError::Network {
            message: format!("{operation} failed: {summary}"),
        };
    }

    CommentsError::Api {
        message: format!("{operation} failed: {summary}"),
    }
}

/// First line of an error's display text.
///
/// Octocrab appends the captured backtrace after a blank line.
fn headline(error: &impl Display) -> String {
    let rendered = error.to_string();
    rendered
        .lines()
        .map(str::trim_end)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_owned()
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> CommentsError {
    let message = maybe_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    });
    if is_auth_failure(status) {
        CommentsError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        CommentsError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::{headline, map_http_error};
    use crate::github::error::CommentsError;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED)]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_http_error("review threads", status, Some("Bad credentials".to_owned()));

        assert!(
            matches!(&error, CommentsError::Authentication { message } if message.contains("Bad credentials")),
            "expected Authentication, got {error:?}"
        );
    }

    #[rstest]
    fn other_statuses_map_to_api_with_reason_phrase() {
        let error = map_http_error("review threads", StatusCode::BAD_GATEWAY, None);

        assert_eq!(
            error,
            CommentsError::Api {
                message: "review threads failed with status 502 Bad Gateway: Bad Gateway"
                    .to_owned(),
            }
        );
    }

    #[rstest]
    #[case::backtrace("Service Error: connection refused\n\nFound at:\n   0: octocrab::execute", "Service Error: connection refused")]
    #[case::single_line("Hyper Error: timed out", "Hyper Error: timed out")]
    #[case::leading_blank("\nJSON Error: eof", "JSON Error: eof")]
    fn headline_drops_trailing_backtrace(#[case] rendered: &str, #[case] expected: &str) {
        assert_eq!(headline(&rendered), expected);
    }
}
