use chrono::{DateTime, Utc};

/// A call as reported by the voice platform.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    id: String,

    #[serde(default)]
    status: Option<CallStatus>,

    #[serde(default)]
    source: Option<String>,

    #[serde(default)]
    destination: Option<String>,

    #[serde(default)]
    created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,

    /// Only set once the call has ended.
    #[serde(default)]
    ended_at: Option<DateTime<Utc>>,
}

impl Call {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: None,
            source: None,
            destination: None,
            created_at: None,
            updated_at: None,
            ended_at: None,
        }
    }

    pub fn with_status(mut self, status: CallStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_numbers(mut self, source: &str, destination: &str) -> Self {
        self.source = Some(source.to_string());
        self.destination = Some(destination.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> Option<&CallStatus> {
        self.status.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CallStatus {
    #[serde(rename = "queued")]
    Queued,
    #[serde(rename = "starting")]
    Starting,
    #[serde(rename = "ongoing")]
    Ongoing,
    #[serde(rename = "ended")]
    Ended,
    #[serde(other)]
    Unknown,
}

/// Envelope wrapping every successful response of the calls endpoint.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CallResponse {
    data: Vec<Call>,
}

impl CallResponse {
    pub fn data(&self) -> &[Call] {
        &self.data
    }

    pub fn into_first(self) -> Option<Call> {
        self.data.into_iter().next()
    }
}
