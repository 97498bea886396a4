//! Application configuration loaded from environment variables and files.
//!
//! Command-line flags are handled separately by the binary; this module only
//! merges the layers that ortho-config discovers on its own.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.pr-comments.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PR_COMMENTS_TOKEN`, `PR_COMMENTS_API_BASE`,
//!    `PR_COMMENTS_REQUEST_TIMEOUT_SECS`
//!
//! When no token is configured, the conventional `GITHUB_TOKEN` environment
//! variable is used.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://github.example.com/api"
//! request_timeout_secs = 30
//! ```

use std::env;
use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{CommentsError, DEFAULT_API_BASE, FetchSettings};

/// Legacy environment variable consulted when no token is configured.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

const PROGRAM_NAME: &str = "pr-comments";

/// Configuration for the review comment fetch.
///
/// # Example
///
/// ```no_run
/// use pr_comments::PrCommentsConfig;
///
/// let config = PrCommentsConfig::load_layers().expect("failed to load configuration");
/// let settings = config.fetch_settings();
/// assert!(!settings.api_base.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PR_COMMENTS",
    discovery(
        dotfile_name = ".pr-comments.toml",
        config_file_name = "pr-comments.toml",
        app_name = "pr-comments"
    )
)]
pub struct PrCommentsConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - Environment: `PR_COMMENTS_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    pub token: Option<String>,

    /// Base URL of the GitHub API. Defaults to `https://api.github.com`.
    ///
    /// Can be provided via:
    /// - Environment: `PR_COMMENTS_API_BASE`
    /// - Config file: `api_base = "..."`
    pub api_base: Option<String>,

    /// Connect and read timeout for the GraphQL request, in seconds.
    ///
    /// Unset means the HTTP client's own defaults apply.
    pub request_timeout_secs: Option<u64>,
}

impl PrCommentsConfig {
    /// Loads configuration from files and the environment.
    ///
    /// The process arguments are not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Configuration`] when a configuration file or
    /// environment value cannot be parsed.
    pub fn load_layers() -> Result<Self, CommentsError> {
        Self::load_from_iter(vec![OsString::from(PROGRAM_NAME)]).map_err(|error| {
            CommentsError::Configuration {
                message: error.to_string(),
            }
        })
    }

    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var(GITHUB_TOKEN_VAR).ok())
    }

    /// Builds the explicit settings used by the fetch pipeline.
    #[must_use]
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            token: self.resolve_token(),
            api_base: self
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
