use paraph_types::{CreateGroupRequest, SignerGroup};
use tracing::info;

use crate::{ClientError, ParaphClient};

impl ParaphClient {
    pub async fn list_groups(&self) -> Result<Vec<SignerGroup>, ClientError> {
        self.get_json("/api/groups").await
    }

    pub async fn create_group(
        &self,
        request: &CreateGroupRequest,
    ) -> Result<SignerGroup, ClientError> {
        let group: SignerGroup = self.post_json("/api/groups", request).await?;
        info!(id = %group.id, name = %group.name, "created signer group");
        Ok(group)
    }
}
