use log::*;

use crate::{context::PrContext, reporter::Reporter};

pub const MULTIPLE_ASSIGNEES_WARNING: &str =
    "Please only assign one person to a PR";

/// Warn when more than one person is assigned. Returns whether a warning
/// was emitted.
pub fn run(context: &PrContext, reporter: &dyn Reporter) -> bool {
    let count = context.pr.effective_assignee_count();
    debug!("PR #{} has {count} assignee(s)", context.pr.number);

    if count > 1 {
        reporter.warn(MULTIPLE_ASSIGNEES_WARNING);
        return true;
    }

    false
}
