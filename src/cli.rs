//! CLI argument parsing and forge configuration.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    config::DEFAULT_CONFIG_FILE,
    context::PrContext,
    error::PolicyError,
    forge::config::{DEFAULT_API_URL, RemoteConfig},
    result::Result,
};

/// Global CLI arguments for the event source, forge access and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    /// Path to the pull_request event payload. Falls back to
    /// GITHUB_EVENT_PATH env var.
    pub event_path: Option<PathBuf>,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub API base URL. Falls back to GITHUB_API_URL env var, then
    /// https://api.github.com.
    pub api_url: String,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    /// Rule configuration file.
    pub config: PathBuf,

    #[arg(long, default_value_t = false, global = true)]
    /// Log label changes instead of making them.
    pub dry_run: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Rule subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Warn when more than one person is assigned to the PR.
    AssigneeCount,

    /// Add a semantic version label to the PR.
    PatchLabel,

    /// Run every rule enabled in the configuration file.
    All,
}

impl Args {
    /// Location of the event payload.
    pub fn event_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.event_path {
            return Ok(path.clone());
        }

        env::var("GITHUB_EVENT_PATH")
            .map(PathBuf::from)
            .map_err(|_| PolicyError::MissingEventPath.into())
    }

    /// Configure the remote for the base repository of the PR.
    pub fn get_remote(&self, context: &PrContext) -> Result<RemoteConfig> {
        let token = resolve(&self.github_token, env::var("GITHUB_TOKEN").ok())
            .ok_or(PolicyError::MissingToken)?;

        let api_url = resolve(&self.api_url, env::var("GITHUB_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(RemoteConfig {
            api_url,
            owner: context.pr.base_owner.clone(),
            repo: context.pr.base_repo.clone(),
            token: SecretString::from(token),
            dry_run: self.dry_run,
        })
    }
}

/// Prefer an explicit flag value, then an environment value. Empty strings
/// count as unset.
fn resolve(flag: &str, env_value: Option<String>) -> Option<String> {
    if !flag.is_empty() {
        return Some(flag.to_string());
    }

    env_value.filter(|v| !v.is_empty())
}
