//! Identity wrappers for the pull request lookup.

use crate::local::RepositoryIdentity;

use super::error::CommentsError;

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::AuthRequired`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, CommentsError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentsError::AuthRequired);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Validates an optional configured token.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::AuthRequired`] when the token is absent or
    /// blank.
    pub fn from_configured(token: Option<&str>) -> Result<Self, CommentsError> {
        token.map_or(Err(CommentsError::AuthRequired), Self::new)
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Repository and head branch whose pull request is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTarget {
    identity: RepositoryIdentity,
    branch: String,
}

impl BranchTarget {
    /// Pairs a repository identity with a head branch name.
    #[must_use]
    pub fn new(identity: RepositoryIdentity, branch: impl Into<String>) -> Self {
        Self {
            identity,
            branch: branch.into(),
        }
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.identity.owner()
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repository(&self) -> &str {
        self.identity.repository()
    }

    /// Returns the head branch name.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the parsed repository identity.
    #[must_use]
    pub const fn identity(&self) -> &RepositoryIdentity {
        &self.identity
    }
}
