pub mod call;
pub mod callflow;
pub mod error;
pub mod request;

pub use call::{Call, CallResponse, CallStatus};
pub use callflow::{CallFlow, CallFlowBuilder, CallFlowStep, SayStep};
pub use error::{ErrorDetails, ErrorResponse};
pub use request::{InitiateCallRequest, Webhook};
