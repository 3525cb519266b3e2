use paraph_core::{build_document_request, DocumentDraft};
use paraph_types::DocumentEntity;
use tracing::info;

use crate::{ClientError, ParaphClient};

impl ParaphClient {
    /// Build the wire request from `draft` and submit it. Build errors are
    /// returned before anything goes over the network.
    pub async fn create_document(
        &self,
        draft: &DocumentDraft,
    ) -> Result<DocumentEntity, ClientError> {
        let request = build_document_request(draft)?;
        let entity: DocumentEntity = self.post_json("/api/documents", &request).await?;
        info!(id = %entity.id, title = %entity.title, "created document");
        Ok(entity)
    }
}
