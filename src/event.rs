//! Loads the GitHub `pull_request` webhook payload that CI hands to the
//! job (`GITHUB_EVENT_PATH`) and converts it into a `PrContext`.
use log::*;
use serde::Deserialize;
use std::path::Path;

use crate::{
    context::{Issue, LabelRef, PrContext, PullRequest},
    error::PolicyError,
    result::Result,
};

#[derive(Debug, Deserialize)]
struct EventUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
struct EventLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct EventRepo {
    pub name: String,
    pub owner: EventUser,
}

#[derive(Debug, Deserialize)]
struct EventBase {
    pub repo: EventRepo,
}

#[derive(Debug, Deserialize)]
struct EventHead {
    pub sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub body: Option<String>,
    pub assignees: Option<Vec<EventUser>>,
    pub assignee: Option<EventUser>,
    #[serde(default)]
    pub labels: Vec<EventLabel>,
    pub base: EventBase,
    pub head: Option<EventHead>,
}

#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pub pull_request: Option<EventPullRequest>,
}

impl From<EventPullRequest> for PrContext {
    fn from(pr: EventPullRequest) -> Self {
        Self {
            pr: PullRequest {
                number: pr.number,
                title: pr.title,
                body: pr.body.unwrap_or_default(),
                assignees: pr
                    .assignees
                    .map(|users| users.into_iter().map(|u| u.login).collect()),
                assignee: pr.assignee.map(|u| u.login),
                base_owner: pr.base.repo.owner.login,
                base_repo: pr.base.repo.name,
                head_sha: pr.head.and_then(|h| h.sha),
            },
            issue: Issue {
                labels: pr
                    .labels
                    .into_iter()
                    .map(|l| LabelRef::new(l.name))
                    .collect(),
            },
        }
    }
}

/// Parse a pull request event payload.
pub fn parse_event(content: &str) -> Result<PrContext> {
    let event: PullRequestEvent =
        serde_json::from_str(content).map_err(PolicyError::from)?;

    let pr = event.pull_request.ok_or_else(|| {
        PolicyError::invalid_event("payload has no pull_request object")
    })?;

    Ok(PrContext::from(pr))
}

/// Read and parse the event payload at `path`.
pub async fn load_event(path: &Path) -> Result<PrContext> {
    debug!("loading pull request event from {}", path.display());

    let content = tokio::fs::read_to_string(path).await.map_err(|err| {
        PolicyError::invalid_event(format!(
            "failed to read {}: {err}",
            path.display()
        ))
    })?;

    let context = parse_event(&content)?;

    info!(
        "loaded PR #{} for {}/{}",
        context.pr.number, context.pr.base_owner, context.pr.base_repo
    );

    Ok(context)
}
