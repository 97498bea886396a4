//! Error types for local repository metadata lookups.

use thiserror::Error;

/// Errors that may occur while reading local Git metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalDiscoveryError {
    /// The directory is not within a Git repository.
    #[error("not inside a Git repository: {path}")]
    NotARepository {
        /// Directory the lookup started from.
        path: String,
    },

    /// HEAD points at a branch with no commits yet.
    #[error("current branch has no commits yet")]
    UnbornHead,

    /// The specified remote does not exist.
    #[error("remote '{name}' not found")]
    RemoteNotFound {
        /// Name of the missing remote.
        name: String,
    },

    /// The remote URL could not be parsed into an owner and repository.
    #[error("could not parse remote URL: {url}")]
    InvalidRemoteUrl {
        /// The unparseable URL string.
        url: String,
    },

    /// Git operation failed.
    #[error("git error: {message}")]
    Git {
        /// Error detail from the git2 library.
        message: String,
    },
}

impl From<git2::Error> for LocalDiscoveryError {
    fn from(error: git2::Error) -> Self {
        Self::Git {
            message: error.message().to_owned(),
        }
    }
}
