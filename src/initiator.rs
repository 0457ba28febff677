use crate::client::VoiceApi;
use crate::error::VoiceError;
use crate::types::{Call, CallFlow, InitiateCallRequest, Webhook};

/// Places a single call through a [`VoiceApi`] and reports the outcome.
pub struct CallInitiator<A: VoiceApi> {
    api: A,
}

impl<A: VoiceApi> CallInitiator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Sends one initiate-call request. Numbers and flow are passed through
    /// untouched; the platform does all validation.
    pub async fn initiate(
        &self,
        source: &str,
        destination: &str,
        call_flow: CallFlow,
        webhook: Option<Webhook>,
    ) -> Result<Call, VoiceError> {
        let request = InitiateCallRequest::new(source, destination, call_flow).with_webhook(webhook);
        self.api.initiate_call(request).await
    }

    /// Initiates the call and logs exactly one line with the result.
    /// Failures are logged and swallowed.
    pub async fn run(
        &self,
        source: &str,
        destination: &str,
        call_flow: CallFlow,
        webhook: Option<Webhook>,
    ) -> Option<Call> {
        match self.initiate(source, destination, call_flow, webhook).await {
            Ok(call) => {
                tracing::info!(call_id = %call.id(), "call initiated: {:?}", call);
                Some(call)
            }
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }
}
