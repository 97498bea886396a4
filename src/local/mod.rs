//! Local Git repository metadata.
//!
//! This module reads the current branch and `origin` remote of a working
//! directory and turns the remote URL into the owner and repository used to
//! look up the branch's pull request.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pr_comments::local::{Git2Metadata, GitMetadata, parse_repo_path};
//!
//! let git = Git2Metadata;
//! let branch = git.current_branch(Path::new(".")).expect("branch");
//! let remote = git.remote_url(Path::new(".")).expect("remote");
//! let identity = parse_repo_path(&remote).expect("GitHub remote");
//! println!("{}/{} @ {branch}", identity.owner(), identity.repository());
//! ```

mod error;
mod git_metadata;
mod remote;

pub use error::LocalDiscoveryError;
pub use git_metadata::{DEFAULT_REMOTE_NAME, Git2Metadata, GitMetadata};
pub use remote::{RepositoryIdentity, parse_repo_path};

#[cfg(test)]
pub use git_metadata::MockGitMetadata;

#[cfg(test)]
mod tests;
