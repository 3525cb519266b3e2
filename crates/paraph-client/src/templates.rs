use paraph_core::{
    build_template_request, build_template_update, build_use_template_request, TemplateDraft,
    TemplatePatch, UseTemplate,
};
use paraph_types::{DocumentEntity, TemplateEntity};
use tracing::info;

use crate::{ClientError, ParaphClient};

impl ParaphClient {
    pub async fn create_template(
        &self,
        draft: &TemplateDraft,
    ) -> Result<TemplateEntity, ClientError> {
        let request = build_template_request(draft)?;
        let entity: TemplateEntity = self.post_json("/api/templates", &request).await?;
        info!(id = %entity.id, name = %entity.name, "created template");
        Ok(entity)
    }

    /// Fetch a stored template, e.g. to prefill an edit draft with
    /// [`TemplateDraft::from_entity`].
    pub async fn get_template(&self, id: &str) -> Result<TemplateEntity, ClientError> {
        self.get_json(&format!("/api/templates/{}", id)).await
    }

    /// Send only the fields the patch carries; everything else keeps its
    /// stored value.
    pub async fn update_template(
        &self,
        id: &str,
        patch: &TemplatePatch,
    ) -> Result<TemplateEntity, ClientError> {
        let request = build_template_update(patch)?;
        let entity: TemplateEntity = self
            .patch_json(&format!("/api/templates/{}", id), &request)
            .await?;
        info!(id = %entity.id, name = %entity.name, "updated template");
        Ok(entity)
    }

    /// Instantiate a template as a document by assigning real signers to
    /// its roles.
    pub async fn use_template(
        &self,
        draft: &TemplateDraft,
        usage: &UseTemplate,
    ) -> Result<DocumentEntity, ClientError> {
        let request = build_use_template_request(draft, usage)?;
        let entity: DocumentEntity = self
            .post_json(&format!("/api/templates/{}/use", usage.template_id), &request)
            .await?;
        info!(id = %entity.id, title = %entity.title, "created document from template");
        Ok(entity)
    }
}
