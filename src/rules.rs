//! Pull request policy rules.
//!
//! Each rule is independent: it takes the `PrContext` of the run plus the
//! collaborators it needs and shares no state with the others.

/// Warns when a PR has more than one assignee.
pub mod assignee_count;

/// Fixed vocabulary of release labels.
pub mod catalog;

/// Applies a semantic version label to the PR.
pub mod patch_label;
