use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Request, StatusCode};
use secrecy::ExposeSecret;

use crate::client::config::Config;
use crate::client::consts::{AUTHORIZATION_SCHEME, CALLS_PATH};
use crate::error::VoiceError;
use crate::types::{Call, CallResponse, ErrorResponse, InitiateCallRequest};

pub fn build_request(
    http: &reqwest::Client,
    config: &Config,
    body: &InitiateCallRequest,
) -> reqwest::Result<Request> {
    http.post(format!("{}{}", config.base_url(), CALLS_PATH))
        .header(
            AUTHORIZATION,
            format!("{} {}", AUTHORIZATION_SCHEME, config.api_key().expose_secret()),
        )
        .header(USER_AGENT, config.user_agent())
        .header(ACCEPT, "application/json")
        .json(body)
        .build()
}

pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<Call, VoiceError> {
    if status.is_success() {
        let response = serde_json::from_slice::<CallResponse>(body)?;
        return response.into_first().ok_or(VoiceError::EmptyResponse);
    }

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(errors) if !errors.errors().is_empty() => Err(VoiceError::Api { status, errors }),
        _ => Err(VoiceError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }),
    }
}
