//! Error types exposed by the review comment pipeline.

use thiserror::Error;

use crate::local::LocalDiscoveryError;

/// Guidance shown when no personal access token is configured.
pub const AUTH_GUIDANCE: &str = concat!(
    "Authentication required. Please set GITHUB_TOKEN environment variable.\n",
    "You can create one at https://github.com/settings/tokens\n",
    "The token needs \"repo\" scope to access repository data."
);

/// Errors surfaced while locating, fetching, or printing review comments.
///
/// Each variant keeps the text of its underlying cause so the CLI can report
/// the precise failure and tests can match on the failure kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentsError {
    /// Git metadata could not be read (not a repository, no origin, ...).
    #[error("failed to read git metadata: {message}")]
    GitUnavailable {
        /// Detail from the Git lookup.
        message: String,
    },

    /// The origin URL does not name an `owner/repo` pair.
    #[error("remote URL does not identify a GitHub repository: {url}")]
    InvalidRemote {
        /// The rejected remote URL.
        url: String,
    },

    /// No personal access token was configured.
    #[error("{}", AUTH_GUIDANCE)]
    AuthRequired,

    /// The token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-success status or a GraphQL error payload.
    #[error("GitHub API error: {message}")]
    Api {
        /// Status and message describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The GitHub response body could not be decoded.
    #[error("unexpected GitHub response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The `--dir` override does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// Absolute path that was checked.
        path: String,
    },

    /// An option the CLI does not recognise.
    #[error("Unknown option: {option}")]
    UnknownOption {
        /// The offending flag.
        option: String,
    },

    /// The command line could not be parsed for another reason.
    #[error("{message}")]
    InvalidArgument {
        /// Parser message.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<LocalDiscoveryError> for CommentsError {
    fn from(error: LocalDiscoveryError) -> Self {
        match error {
            LocalDiscoveryError::InvalidRemoteUrl { url } => Self::InvalidRemote { url },
            other => Self::GitUnavailable {
                message: other.to_string(),
            },
        }
    }
}
