#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallFlow {
    /// Human readable name of the flow.
    title: String,

    /// Steps executed by the voice platform, in order.
    steps: Vec<CallFlowStep>,

    /// Whether the whole call should be recorded.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    record: bool,
}

impl CallFlow {
    pub fn new(title: &str, steps: Vec<CallFlowStep>) -> Self {
        Self {
            title: title.to_string(),
            steps,
            record: false,
        }
    }

    pub fn builder() -> CallFlowBuilder {
        CallFlowBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[CallFlowStep] {
        &self.steps
    }

    pub fn record(&self) -> bool {
        self.record
    }
}

pub struct CallFlowBuilder {
    flow: CallFlow,
}

impl Default for CallFlowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CallFlowBuilder {
    pub fn new() -> Self {
        Self {
            flow: CallFlow::new("", Vec::new()),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.flow.title = title.to_string();
        self
    }

    pub fn with_step(mut self, step: CallFlowStep) -> Self {
        self.flow.steps.push(step);
        self
    }

    pub fn with_say(self, voice: &str, payload: &str, language: &str) -> Self {
        self.with_step(CallFlowStep::say(voice, payload, language))
    }

    pub fn with_record(mut self, record: bool) -> Self {
        self.flow.record = record;
        self
    }

    pub fn build(self) -> CallFlow {
        self.flow
    }
}

/// A single instruction of a call flow.
///
/// Encoded as `{"action": "...", "options": {...}}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", content = "options")]
pub enum CallFlowStep {
    #[serde(rename = "say")]
    Say(SayStep),
}

impl CallFlowStep {
    pub fn say(voice: &str, payload: &str, language: &str) -> Self {
        CallFlowStep::Say(SayStep::new(voice, payload, language))
    }

    pub fn action(&self) -> &'static str {
        match self {
            CallFlowStep::Say(_) => "say",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SayStep {
    /// The text to synthesize.
    payload: String,

    /// ex: "male", "female"
    voice: String,

    /// Locale of the payload, ex: "en-GB"
    language: String,
}

impl SayStep {
    pub fn new(voice: &str, payload: &str, language: &str) -> Self {
        Self {
            payload: payload.to_string(),
            voice: voice.to_string(),
            language: language.to_string(),
        }
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}
