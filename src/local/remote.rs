//! Git remote URL parsing into a repository identity.
//!
//! Only the `owner/repo` pair matters to the GraphQL lookup, so the parser
//! accepts SCP-style SSH remotes and URL-style remotes on any host and
//! rejects anything that does not end in exactly two path segments.

use url::Url;

use super::error::LocalDiscoveryError;

const GITHUB_HOST: &str = "github.com";

/// Owner and repository name extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    host: String,
    owner: String,
    repository: String,
}

impl RepositoryIdentity {
    /// Returns the host the remote points at.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the repository owner (user or organisation).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name without any `.git` suffix.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns true when the remote points at `github.com`.
    #[must_use]
    pub fn is_github_com(&self) -> bool {
        self.host.eq_ignore_ascii_case(GITHUB_HOST)
    }
}

/// Parses a Git remote URL into its owner and repository.
///
/// Supported forms:
/// - `git@github.com:owner/repo.git`
/// - `ssh://git@github.com/owner/repo.git`
/// - `https://github.com/owner/repo.git`
/// - `https://github.com/owner/repo`
///
/// # Errors
///
/// Returns [`LocalDiscoveryError::InvalidRemoteUrl`] when the URL is empty,
/// has no host, or its path is not exactly `owner/repo`.
pub fn parse_repo_path(remote_url: &str) -> Result<RepositoryIdentity, LocalDiscoveryError> {
    let trimmed = remote_url.trim();

    split_scp_style(trimmed)
        .or_else(|| split_url_style(trimmed))
        .and_then(|(host, path)| identity_from_path(host, &path))
        .ok_or_else(|| LocalDiscoveryError::InvalidRemoteUrl {
            url: remote_url.to_owned(),
        })
}

/// Splits `user@host:owner/repo.git` into host and path.
fn split_scp_style(remote_url: &str) -> Option<(String, String)> {
    if remote_url.contains("://") {
        return None;
    }

    let (_, address) = remote_url.split_once('@')?;
    let (host, path) = address.split_once(':')?;
    if host.is_empty() {
        return None;
    }

    Some((host.to_owned(), path.to_owned()))
}

/// Splits `scheme://host[:port]/owner/repo.git` into host and path.
fn split_url_style(remote_url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(remote_url).ok()?;
    let host = parsed.host_str()?.to_owned();
    Some((host, parsed.path().to_owned()))
}

fn identity_from_path(host: String, raw_path: &str) -> Option<RepositoryIdentity> {
    let mut segments = raw_path.trim_matches('/').split('/');
    let owner = segments.next().filter(|segment| !segment.is_empty())?;
    let repo_segment = segments.next()?;

    // owner/repo only; nested paths are not GitHub repositories
    if segments.next().is_some() {
        return None;
    }

    let repository = repo_segment.strip_suffix(".git").unwrap_or(repo_segment);
    if repository.is_empty() {
        return None;
    }

    Some(RepositoryIdentity {
        host,
        owner: owner.to_owned(),
        repository: repository.to_owned(),
    })
}
