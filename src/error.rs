use reqwest::StatusCode;

use crate::types::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("voice api rejected the request ({status}): {errors}")]
    Api {
        status: StatusCode,
        errors: ErrorResponse,
    },
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("voice api returned no call")]
    EmptyResponse,
}
