//! Implements the Forge trait for Github
use async_trait::async_trait;
use color_eyre::eyre::eyre;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::{
    context::LabelRef,
    error::PolicyError,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::Forge,
        types::{AddLabelsRequest, CreateLabelRequest, GetFileContentRequest},
    },
    result::Result,
};

/// GitHub forge implementation using Octocrab for API interactions with
/// repository contents and labels.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.api_url.clone())?
            .build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<String>> {
        let path = req.path;
        let repos = self.instance.repos(&self.config.owner, &self.config.repo);
        let mut builder = repos.get_content().path(&path);

        if let Some(git_ref) = req.git_ref {
            builder = builder.r#ref(git_ref);
        }

        match builder.send().await {
            Err(octocrab::Error::GitHub { source, backtrace }) => {
                if source.status_code == StatusCode::NOT_FOUND {
                    info!("no file found for path: {path}");
                    Ok(None)
                } else {
                    let msg = format!(
                        "error getting contents for path: {path}, status: {}, backtrace: {backtrace}",
                        source.status_code
                    );
                    error!("{msg}");
                    Err(eyre!(msg))
                }
            }
            Err(err) => {
                let msg = format!(
                    "encountered error getting file contents for path: {path}: {err}"
                );
                error!("{msg}");
                Err(eyre!(msg))
            }
            Ok(mut data) => {
                let items = data.take_items();

                if items.is_empty() {
                    info!("no file found for path: {path}");
                    return Ok(None);
                }

                if let Some(content) = items[0].decoded_content() {
                    Ok(Some(content))
                } else {
                    Err(eyre!("failed to decode file content for path: {path}"))
                }
            }
        }
    }

    async fn list_repo_labels(&self) -> Result<Vec<LabelRef>> {
        let page = self
            .instance
            .issues(&self.config.owner, &self.config.repo)
            .list_labels_for_repo()
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await
            .map_err(PolicyError::from)?;

        let labels = self
            .instance
            .all_pages(page)
            .await
            .map_err(PolicyError::from)?;

        Ok(labels.into_iter().map(|l| LabelRef::new(l.name)).collect())
    }

    async fn create_label(&self, req: CreateLabelRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .create_label(&req.name, &req.color, &req.description)
            .await
            .map_err(PolicyError::from)?;

        Ok(())
    }

    async fn add_labels(&self, req: AddLabelsRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(req.issue_number, &req.labels)
            .await
            .map_err(PolicyError::from)?;

        Ok(())
    }
}
