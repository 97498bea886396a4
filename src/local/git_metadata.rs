//! Read-only Git metadata lookups.
//!
//! The pull request lookup needs two facts about the working copy: the
//! current branch and the URL of the `origin` remote. Both are read through
//! libgit2 so no external `git` binary is required.

use std::path::Path;

use git2::{ErrorCode, Repository};

use super::error::LocalDiscoveryError;

/// Remote whose URL identifies the GitHub repository.
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Source of the branch name and remote URL for a working directory.
#[cfg_attr(test, mockall::automock)]
pub trait GitMetadata: Send + Sync {
    /// Returns the abbreviated name of the current branch.
    ///
    /// A detached HEAD is reported as `HEAD`, matching
    /// `git rev-parse --abbrev-ref HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error when `directory` is not inside a repository or HEAD
    /// cannot be resolved.
    fn current_branch(&self, directory: &Path) -> Result<String, LocalDiscoveryError>;

    /// Returns the configured URL of the `origin` remote.
    ///
    /// # Errors
    ///
    /// Returns an error when `directory` is not inside a repository or no
    /// `origin` remote is configured.
    fn remote_url(&self, directory: &Path) -> Result<String, LocalDiscoveryError>;
}

/// [`GitMetadata`] implementation backed by `git2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Metadata;

impl GitMetadata for Git2Metadata {
    fn current_branch(&self, directory: &Path) -> Result<String, LocalDiscoveryError> {
        let repo = open_repository(directory)?;
        let head = repo.head().map_err(|error| {
            if error.code() == ErrorCode::UnbornBranch {
                LocalDiscoveryError::UnbornHead
            } else {
                LocalDiscoveryError::from(error)
            }
        })?;

        head.shorthand()
            .map(|name| name.trim().to_owned())
            .ok_or_else(|| LocalDiscoveryError::Git {
                message: "branch name is not valid UTF-8".to_owned(),
            })
    }

    fn remote_url(&self, directory: &Path) -> Result<String, LocalDiscoveryError> {
        let repo = open_repository(directory)?;
        let remote = repo.find_remote(DEFAULT_REMOTE_NAME).map_err(|error| {
            if error.code() == ErrorCode::NotFound {
                LocalDiscoveryError::RemoteNotFound {
                    name: DEFAULT_REMOTE_NAME.to_owned(),
                }
            } else {
                LocalDiscoveryError::from(error)
            }
        })?;

        remote
            .url()
            .map(|url| url.trim().to_owned())
            .ok_or_else(|| LocalDiscoveryError::InvalidRemoteUrl {
                url: "(no URL)".to_owned(),
            })
    }
}

/// Opens the repository containing `directory`, searching upwards.
fn open_repository(directory: &Path) -> Result<Repository, LocalDiscoveryError> {
    Repository::discover(directory).map_err(|error| {
        if error.code() == ErrorCode::NotFound {
            LocalDiscoveryError::NotARepository {
                path: directory.display().to_string(),
            }
        } else {
            LocalDiscoveryError::from(error)
        }
    })
}
