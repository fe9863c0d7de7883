//! Typed errors for the CLI and the pull request context.
//!
//! Rule code never matches on these: they exist so the failures that stop
//! a run before any rule executes carry a precise message.

use thiserror::Error;

/// Main error type for pr-policy operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(
        "No pull request event payload: pass --event-path or set GITHUB_EVENT_PATH"
    )]
    MissingEventPath,

    #[error("Invalid pull request event: {0}")]
    InvalidEvent(String),

    #[error("Missing GitHub token: pass --github-token or set GITHUB_TOKEN")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,
}

impl PolicyError {
    /// Create an invalid event error
    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }
}

impl From<serde_json::Error> for PolicyError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEvent(err.to_string())
    }
}

impl From<toml::de::Error> for PolicyError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for PolicyError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
