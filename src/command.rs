//! Command execution: loads the PR context and runs the selected rules.
use log::*;

use crate::{
    cli::{Args, Command},
    config::{Config, RulesConfig},
    context::PrContext,
    event,
    forge::{github::Github, manager::ForgeManager},
    reporter::{ActionsReporter, Reporter},
    result::Result,
    rules::{assignee_count, patch_label},
};

/// What each rule did during a run. `None` means the rule was disabled.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub assignee_warning: Option<bool>,
    pub patch_label: Option<patch_label::Outcome>,
}

/// Entry point for the CLI.
pub async fn execute(args: &Args) -> Result<()> {
    let rules = match args.command {
        Command::AssigneeCount => RulesConfig {
            assignee_count: true,
            patch_label: false,
        },
        Command::PatchLabel => RulesConfig {
            assignee_count: false,
            patch_label: true,
        },
        Command::All => Config::load(&args.config)?.rules,
    };

    let context = event::load_event(&args.event_path()?).await?;

    let summary = run_rules(&rules, &context, &ActionsReporter, || {
        create_forge(args, &context)
    })
    .await?;

    debug!("run summary: {:#?}", summary);

    Ok(())
}

fn create_forge(args: &Args, context: &PrContext) -> Result<ForgeManager> {
    let remote = args.get_remote(context)?;
    let forge = Github::new(remote)?;
    Ok(ForgeManager::new(Box::new(forge)))
}

/// Run the enabled rules in order. The forge is only created when a rule
/// needs it, so rules that only read the event work without a token.
pub async fn run_rules<F>(
    rules: &RulesConfig,
    context: &PrContext,
    reporter: &dyn Reporter,
    create_forge: F,
) -> Result<Summary>
where
    F: FnOnce() -> Result<ForgeManager>,
{
    let mut summary = Summary::default();

    if rules.assignee_count {
        info!("running assignee count rule");
        summary.assignee_warning =
            Some(assignee_count::run(context, reporter));
    }

    if rules.patch_label {
        info!("running patch label rule");
        let forge = create_forge()?;
        summary.patch_label = Some(patch_label::run(context, &forge).await?);
    }

    Ok(summary)
}
