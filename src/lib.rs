mod client;
mod error;
mod initiator;

pub use messagebird_voice_types as types;
pub use client::{build_request, parse_response, Client, Config, ConfigBuilder, VoiceApi};
pub use error::VoiceError;
pub use initiator::CallInitiator;
