//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    context::LabelRef,
    forge::{
        config::RemoteConfig,
        types::{AddLabelsRequest, CreateLabelRequest, GetFileContentRequest},
    },
    result::Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;

    /// Returns `None` when the file does not exist.
    async fn get_file_content(
        &self,
        req: GetFileContentRequest,
    ) -> Result<Option<String>>;

    /// Every label defined on the repository, across all pages.
    async fn list_repo_labels(&self) -> Result<Vec<LabelRef>>;

    async fn create_label(&self, req: CreateLabelRequest) -> Result<()>;

    async fn add_labels(&self, req: AddLabelsRequest) -> Result<()>;
}
