//! Manager that wraps forge implementations
use log::*;

use crate::{
    context::LabelRef,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{AddLabelsRequest, CreateLabelRequest, GetFileContentRequest},
    },
    result::Result,
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        self.remote_config.clone()
    }

    pub async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<String>> {
        debug!(
            "getting file content for {} at ref {:?}",
            req.path, req.git_ref
        );
        self.forge.get_file_content(req).await
    }

    pub async fn list_repo_labels(&self) -> Result<Vec<LabelRef>> {
        let labels = self.forge.list_repo_labels().await?;
        debug!(
            "found {} labels on {}",
            labels.len(),
            self.remote_config.path()
        );
        Ok(labels)
    }

    pub async fn create_label(&self, req: CreateLabelRequest) -> Result<()> {
        if self.remote_config.dry_run {
            warn!("dry_run: would create label: req: {:#?}", req);
            return Ok(());
        }
        info!("creating label {} on {}", req.name, self.remote_config.path());
        self.forge.create_label(req).await
    }

    pub async fn add_labels(&self, req: AddLabelsRequest) -> Result<()> {
        if self.remote_config.dry_run {
            warn!("dry_run: would add labels: req: {:#?}", req);
            return Ok(());
        }
        info!("adding labels {:?} to #{}", req.labels, req.issue_number);
        self.forge.add_labels(req).await
    }
}
