//! Snapshot of the pull request a rule is evaluated against.
//!
//! A `PrContext` is built once per run and passed by reference into every
//! rule; nothing here is global or mutated by the rules themselves.

/// A label either attached to an issue or defined on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRef {
    pub name: String,
}

impl LabelRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Pull request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: String,
    /// Logins of every assignee, when the source reports a list.
    pub assignees: Option<Vec<String>>,
    /// Login of the single assignee, when the source only reports one.
    pub assignee: Option<String>,
    pub base_owner: String,
    pub base_repo: String,
    /// Head commit sha, used as the ref when reading files from the PR.
    pub head_sha: Option<String>,
}

impl PullRequest {
    /// Number of people assigned, preferring the list over the single
    /// assignee field.
    pub fn effective_assignee_count(&self) -> usize {
        match (&self.assignees, &self.assignee) {
            (Some(assignees), _) => assignees.len(),
            (None, Some(_)) => 1,
            (None, None) => 0,
        }
    }
}

/// The issue side of a pull request: its labels at the time of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    pub labels: Vec<LabelRef>,
}

impl Issue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrContext {
    pub pr: PullRequest,
    pub issue: Issue,
}
