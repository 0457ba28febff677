use crate::callflow::CallFlow;

/// Where the platform posts status updates for a call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Webhook {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

impl Webhook {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Body of `POST /calls`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCallRequest {
    source: String,
    destination: String,
    call_flow: CallFlow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    webhook: Option<Webhook>,
}

impl InitiateCallRequest {
    pub fn new(source: &str, destination: &str, call_flow: CallFlow) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            call_flow,
            webhook: None,
        }
    }

    pub fn with_webhook(mut self, webhook: Option<Webhook>) -> Self {
        self.webhook = webhook;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn call_flow(&self) -> &CallFlow {
        &self.call_flow
    }

    pub fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_camel_case_and_skips_missing_webhook() {
        let flow = CallFlow::builder()
            .with_title("Test flow")
            .with_say("female", "Hi", "en-GB")
            .build();
        let json = serde_json::to_value(InitiateCallRequest::new("", "", flow)).unwrap();

        assert_eq!(json["source"], "");
        assert_eq!(json["destination"], "");
        assert_eq!(json["callFlow"]["title"], "Test flow");
        assert!(json.get("webhook").is_none());
    }

    #[test]
    fn encodes_webhook_when_present() {
        let request = InitiateCallRequest::new("31644556677", "31612345678", CallFlow::new("t", vec![]))
            .with_webhook(Some(Webhook::new("https://example.com/hook").with_token("s3cr3t")));
        let json = serde_json::to_value(request).unwrap();

        assert_eq!(
            json["webhook"],
            serde_json::json!({"url": "https://example.com/hook", "token": "s3cr3t"})
        );
    }
}
