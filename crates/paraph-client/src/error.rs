use paraph_core::BuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The draft failed validation locally; nothing was sent.
    #[error("Request not sent: {0}")]
    Build(#[from] BuildError),

    /// The platform rejected the request. Not retried; the caller decides
    /// whether to fix the draft and resubmit.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
