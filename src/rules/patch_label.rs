//! Gives every PR in an auto-released project a semantic version label.
//!
//! Projects opt in by having an `.autorc` file. PRs that already carry a
//! `Version: *` label are left alone; otherwise one label is picked from
//! the PR body and labels, the repository is seeded with the release label
//! vocabulary if it has never been, and the label is added to the PR.
use log::*;

use crate::{
    context::{LabelRef, PrContext},
    forge::{
        manager::ForgeManager,
        types::{AddLabelsRequest, GetFileContentRequest},
    },
    result::Result,
    rules::catalog::{self, LabelCatalogEntry},
};

/// Config file whose presence opts a project into release labelling.
pub const AUTORC_PATH: &str = ".autorc";
/// Body text of PRs opened by Netlify CMS.
pub const NETLIFY_CMS_MARKER: &str = "Automatically generated by Netlify CMS";
/// Label dependabot puts on dependency bumps.
pub const DEPENDENCIES_LABEL: &str = "dependencies";
/// Prefix shared by all release labels.
pub const RELEASE_LABEL_PREFIX: &str = "Version: ";

/// How a run of the rule ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project has no `.autorc`.
    NotOptedIn,
    /// The PR already carries this release label.
    AlreadyLabelled(String),
    /// `label` was added to the PR after creating `created` in the repo.
    Labelled {
        label: String,
        created: Vec<String>,
    },
}

pub fn is_release_label(name: &str) -> bool {
    name.starts_with(RELEASE_LABEL_PREFIX)
}

/// Pick the label for this PR. First match wins.
pub fn select_label(context: &PrContext) -> &'static LabelCatalogEntry {
    if context.pr.body.contains(NETLIFY_CMS_MARKER) {
        &catalog::DOCS
    } else if context.issue.has_label(DEPENDENCIES_LABEL) {
        &catalog::TRIVIAL
    } else {
        &catalog::PATCH
    }
}

/// Catalog entries that must be created in a repository with these labels.
///
/// A repository that already has the patch label was seeded on an earlier
/// run and gets nothing. Otherwise every entry it lacks is returned, in
/// catalog order.
pub fn labels_to_create(
    repo_labels: &[LabelRef],
) -> Vec<&'static LabelCatalogEntry> {
    let has = |name: &str| repo_labels.iter().any(|l| l.name == name);

    if has(catalog::PATCH.name) {
        return vec![];
    }

    catalog::LABEL_CATALOG
        .iter()
        .filter(|entry| !has(entry.name))
        .collect()
}

pub async fn run(context: &PrContext, forge: &ForgeManager) -> Result<Outcome> {
    let autorc = forge
        .get_file_content(GetFileContentRequest {
            path: AUTORC_PATH.to_string(),
            git_ref: context.pr.head_sha.clone(),
        })
        .await?
        .unwrap_or_default();

    if autorc.is_empty() {
        info!("skipping release label: no {AUTORC_PATH} found");
        return Ok(Outcome::NotOptedIn);
    }

    if let Some(existing) =
        context.issue.labels.iter().find(|l| is_release_label(&l.name))
    {
        info!(
            "PR #{} already has release label: {}",
            context.pr.number, existing.name
        );
        return Ok(Outcome::AlreadyLabelled(existing.name.clone()));
    }

    let selected = select_label(context);
    debug!("selected label {} for PR #{}", selected.name, context.pr.number);

    let repo_labels = forge.list_repo_labels().await?;
    let missing = labels_to_create(&repo_labels);
    let mut created = vec![];

    for entry in missing {
        forge.create_label(entry.create_request()).await?;
        created.push(entry.name.to_string());
    }

    forge
        .add_labels(AddLabelsRequest {
            issue_number: context.pr.number,
            labels: vec![selected.name.to_string()],
        })
        .await?;

    info!("labelled PR #{} with {}", context.pr.number, selected.name);

    Ok(Outcome::Labelled {
        label: selected.name.to_string(),
        created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        context::{Issue, PullRequest},
        forge::traits::MockForge,
        test_helpers::create_test_forge_manager,
    };
    use color_eyre::eyre::eyre;

    fn context(body: &str, labels: &[&str]) -> PrContext {
        PrContext {
            pr: PullRequest {
                number: 12,
                body: body.to_string(),
                base_owner: "artsy".to_string(),
                base_repo: "reaction".to_string(),
                head_sha: Some("abc123".to_string()),
                ..PullRequest::default()
            },
            issue: Issue {
                labels: labels.iter().map(|l| LabelRef::new(*l)).collect(),
            },
        }
    }

    fn repo_labels(names: &[&str]) -> Vec<LabelRef> {
        names.iter().map(|n| LabelRef::new(*n)).collect()
    }

    fn expect_autorc(mock_forge: &mut MockForge, content: Option<&str>) {
        let content = content.map(String::from);
        mock_forge
            .expect_get_file_content()
            .withf(|req| req.path == AUTORC_PATH)
            .times(1)
            .returning(move |_| Ok(content.clone()));
    }

    fn expect_added(mock_forge: &mut MockForge, label: &'static str) {
        mock_forge
            .expect_add_labels()
            .withf(move |req| req.issue_number == 12 && req.labels == [label])
            .times(1)
            .returning(|_| Ok(()));
    }

    #[tokio::test]
    async fn does_nothing_if_there_is_no_autorc() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, None);
        mock_forge.expect_list_repo_labels().never();
        mock_forge.expect_create_label().never();
        mock_forge.expect_add_labels().never();

        let forge = create_test_forge_manager(mock_forge);
        let outcome = run(&context("", &[]), &forge).await.unwrap();

        assert_eq!(outcome, Outcome::NotOptedIn);
    }

    #[tokio::test]
    async fn empty_autorc_counts_as_missing() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some(""));
        mock_forge.expect_list_repo_labels().never();
        mock_forge.expect_create_label().never();
        mock_forge.expect_add_labels().never();

        let forge = create_test_forge_manager(mock_forge);
        let outcome = run(&context("", &[]), &forge).await.unwrap();

        assert_eq!(outcome, Outcome::NotOptedIn);
    }

    #[tokio::test]
    async fn reads_autorc_from_pr_head() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_file_content()
            .with(mockall::predicate::eq(GetFileContentRequest {
                path: AUTORC_PATH.to_string(),
                git_ref: Some("abc123".to_string()),
            }))
            .times(1)
            .returning(|_| Ok(None));

        let forge = create_test_forge_manager(mock_forge);
        run(&context("", &[]), &forge).await.unwrap();
    }

    #[tokio::test]
    async fn does_nothing_if_there_is_already_a_release_label() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge.expect_list_repo_labels().never();
        mock_forge.expect_create_label().never();
        mock_forge.expect_add_labels().never();

        let forge = create_test_forge_manager(mock_forge);
        let outcome = run(&context("", &["Version: Major"]), &forge)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::AlreadyLabelled("Version: Major".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn creates_labels_for_this_repo_if_there_are_no_labels_yet() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .times(1)
            .returning(|| Ok(vec![]));
        mock_forge
            .expect_create_label()
            .times(catalog::LABEL_CATALOG.len())
            .returning(|_| Ok(()));
        expect_added(&mut mock_forge, "Version: Patch");

        let forge = create_test_forge_manager(mock_forge);
        let outcome = run(&context("", &[]), &forge).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Labelled {
                label: "Version: Patch".to_string(),
                created: catalog::LABEL_CATALOG
                    .iter()
                    .map(|e| e.name.to_string())
                    .collect(),
            }
        );
    }

    #[tokio::test]
    async fn creates_labels_with_catalog_definitions() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .returning(|| Ok(vec![]));
        for entry in catalog::LABEL_CATALOG.iter() {
            mock_forge
                .expect_create_label()
                .with(mockall::predicate::eq(entry.create_request()))
                .times(1)
                .returning(|_| Ok(()));
        }
        mock_forge.expect_add_labels().returning(|_| Ok(()));

        let forge = create_test_forge_manager(mock_forge);
        run(&context("", &[]), &forge).await.unwrap();
    }

    #[tokio::test]
    async fn posts_a_patch_label_if_there_are_no_labels_already_added() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .returning(|| Ok(repo_labels(&["Version: Patch"])));
        mock_forge.expect_create_label().never();
        expect_added(&mut mock_forge, "Version: Patch");

        let forge = create_test_forge_manager(mock_forge);
        run(&context("", &[]), &forge).await.unwrap();
    }

    #[tokio::test]
    async fn merge_on_green_has_no_special_effect() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .returning(|| Ok(repo_labels(&["Version: Patch"])));
        mock_forge.expect_create_label().never();
        expect_added(&mut mock_forge, "Version: Patch");

        let forge = create_test_forge_manager(mock_forge);
        run(&context("", &["Merge on Green"]), &forge).await.unwrap();
    }

    #[tokio::test]
    async fn uses_the_docs_label_if_the_pr_was_created_by_netlify_cms() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .returning(|| Ok(repo_labels(&["Version: Patch"])));
        mock_forge.expect_create_label().never();
        expect_added(&mut mock_forge, "Docs");

        let forge = create_test_forge_manager(mock_forge);
        run(&context(NETLIFY_CMS_MARKER, &[]), &forge).await.unwrap();
    }

    #[tokio::test]
    async fn uses_the_trivial_label_if_it_is_a_dependabot_pr() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge.expect_list_repo_labels().returning(|| {
            Ok(repo_labels(&["Version: Patch", "Version: Trivial"]))
        });
        mock_forge.expect_create_label().never();
        expect_added(&mut mock_forge, "Version: Trivial");

        let forge = create_test_forge_manager(mock_forge);
        run(&context("", &[DEPENDENCIES_LABEL]), &forge)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn adds_label_even_when_repo_already_has_every_label() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge.expect_list_repo_labels().returning(|| {
            Ok(catalog::LABEL_CATALOG
                .iter()
                .map(|e| LabelRef::new(e.name))
                .collect())
        });
        mock_forge.expect_create_label().never();
        expect_added(&mut mock_forge, "Version: Patch");

        let forge = create_test_forge_manager(mock_forge);
        let outcome = run(&context("", &[]), &forge).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Labelled {
                label: "Version: Patch".to_string(),
                created: vec![],
            }
        );
    }

    #[tokio::test]
    async fn forge_errors_propagate() {
        let mut mock_forge = MockForge::new();
        expect_autorc(&mut mock_forge, Some("{}"));
        mock_forge
            .expect_list_repo_labels()
            .returning(|| Err(eyre!("403 forbidden")));
        mock_forge.expect_create_label().never();
        mock_forge.expect_add_labels().never();

        let forge = create_test_forge_manager(mock_forge);
        let result = run(&context("", &[]), &forge).await;

        assert!(result.is_err());
    }

    #[test]
    fn docs_marker_wins_over_dependencies_label() {
        let context = context(
            &format!("{NETLIFY_CMS_MARKER}\n\nupdated posts"),
            &[DEPENDENCIES_LABEL],
        );
        assert_eq!(select_label(&context).name, "Docs");
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let context = context("automatically generated by netlify cms", &[]);
        assert_eq!(select_label(&context).name, "Version: Patch");
    }

    #[test]
    fn release_label_prefix_is_case_sensitive() {
        assert!(is_release_label("Version: Minor"));
        assert!(is_release_label("Version: Something Custom"));
        assert!(!is_release_label("version: minor"));
        assert!(!is_release_label("Version:Minor"));
        assert!(!is_release_label("Merge on Green"));
    }

    #[test]
    fn fills_in_gaps_when_patch_label_missing() {
        let missing = labels_to_create(&repo_labels(&["Docs", "bug"]));
        let names: Vec<&str> = missing.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Version: Major",
                "Version: Minor",
                "Version: Patch",
                "Version: Trivial"
            ]
        );
    }

    #[test]
    fn seeded_repo_needs_nothing() {
        assert!(labels_to_create(&repo_labels(&["Version: Patch"])).is_empty());
    }
}
