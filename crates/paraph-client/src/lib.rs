//! Async client for the Paraph platform APIs
//!
//! Wraps the admin wizard's two external collaborators: the file upload
//! service and the documents/templates API. Draft build failures from
//! `paraph-core` short-circuit before any network I/O; remote rejections
//! come back as [`ClientError::Api`] and are never retried here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod documents;
mod error;
mod groups;
mod templates;
mod upload;

pub use error::ClientError;

/// Default API base URL for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Client for the documents/templates API and the upload service.
#[derive(Clone)]
pub struct ParaphClient {
    http: Client,
    api_base: String,
    upload_base: String,
    token: Option<String>,
}

impl ParaphClient {
    pub fn new(api_base: &str) -> Self {
        Self::with_timeout(api_base, 30)
    }

    /// Client with a custom request timeout in seconds.
    pub fn with_timeout(api_base: &str, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        let base = api_base.trim_end_matches('/').to_string();
        Self {
            http,
            upload_base: base.clone(),
            api_base: base,
            token: None,
        }
    }

    /// Client from `PARAPH_API_URL`, `PARAPH_UPLOAD_URL` and
    /// `PARAPH_API_TOKEN`, falling back to the local defaults. The upload
    /// base defaults to the API base when unset.
    pub fn from_env() -> Self {
        let api_base =
            std::env::var("PARAPH_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let mut client = Self::new(&api_base);
        if let Ok(upload_base) = std::env::var("PARAPH_UPLOAD_URL") {
            client.upload_base = upload_base.trim_end_matches('/').to_string();
        }
        if let Ok(token) = std::env::var("PARAPH_API_TOKEN") {
            client.token = Some(token);
        }
        client
    }

    /// Use a separate base URL for the upload service.
    pub fn upload_base(mut self, upload_base: &str) -> Self {
        self.upload_base = upload_base.trim_end_matches('/').to_string();
        self
    }

    /// Send a bearer token with every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .authorized(self.http.get(format!("{}{}", self.api_base, path)))
            .send()
            .await?;
        parse_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.http.post(format!("{}{}", self.api_base, path)))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .authorized(self.http.patch(format!("{}{}", self.api_base, path)))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }
}

impl Default for ParaphClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json().await?)
}

/// Map a non-2xx response to [`ClientError::Api`], reading the platform's
/// `{"error", "status"}` body when present.
async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.error,
        Err(_) => text,
    };
    ClientError::Api { status, message }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}
