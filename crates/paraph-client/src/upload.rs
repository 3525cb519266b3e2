use paraph_types::UploadTarget;
use serde::Serialize;
use tracing::debug;

use crate::{api_error, parse_response, ClientError, ParaphClient};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest<'a> {
    file_name: &'a str,
}

impl ParaphClient {
    /// Ask the upload service for a presigned target for `file_name`.
    pub async fn request_upload(&self, file_name: &str) -> Result<UploadTarget, ClientError> {
        let response = self
            .authorized(self.http.post(format!("{}/uploads", self.upload_base)))
            .json(&UploadRequest { file_name })
            .send()
            .await?;
        parse_response(response).await
    }

    /// Upload a PDF in two phases: request a target, then PUT the bytes to
    /// it. Returns the file URL to reference from a draft. Both phases must
    /// complete before the returned URL is valid.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let target = self.request_upload(file_name).await?;
        if target.upload_url.is_empty() {
            return Err(anyhow::anyhow!("upload service returned an empty upload target").into());
        }
        debug!(file = file_name, bytes = bytes.len(), "uploading");
        let response = self
            .http
            .put(&target.upload_url)
            .header(reqwest::header::CONTENT_TYPE, "application/pdf")
            .body(bytes)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(target.file_url)
    }
}
