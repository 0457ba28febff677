use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::VoiceError;
use crate::types::{Call, CallFlow, InitiateCallRequest, Webhook};

pub mod config;
mod consts;
mod utils;

pub use config::{Config, ConfigBuilder};
pub use utils::{build_request, parse_response};

/// The remote boundary of the voice platform.
///
/// `Client` talks HTTP; tests swap in a fake.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VoiceApi: Send + Sync {
    /// Asks the platform to place a call. Success means the request was
    /// accepted, not that the call was answered.
    async fn initiate_call(&self, request: InitiateCallRequest) -> Result<Call, VoiceError>;
}

pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn initiate_call_with(
        &self,
        source: &str,
        destination: &str,
        call_flow: CallFlow,
        webhook: Option<Webhook>,
    ) -> Result<Call, VoiceError> {
        let request = InitiateCallRequest::new(source, destination, call_flow).with_webhook(webhook);
        self.initiate_call(request).await
    }
}

#[async_trait]
impl VoiceApi for Client {
    async fn initiate_call(&self, request: InitiateCallRequest) -> Result<Call, VoiceError> {
        let http_request = build_request(&self.http, &self.config, &request)?;
        tracing::debug!(
            "initiating call: url={}, source={:?}, destination={:?}, steps={}",
            http_request.url(),
            request.source(),
            request.destination(),
            request.call_flow().steps().len()
        );

        let response = self.http.execute(http_request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!("received response: status={}, bytes={}", status, body.len());

        parse_response(status, &body)
    }
}
