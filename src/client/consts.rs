pub const MESSAGEBIRD_API_KEY: &str = "MESSAGEBIRD_API_KEY";

pub const BASE_URL: &str = "https://voice.messagebird.com";
pub const CALLS_PATH: &str = "/calls";

pub const AUTHORIZATION_SCHEME: &str = "AccessKey";
pub const USER_AGENT: &str = concat!("messagebird-voice-rs/", env!("CARGO_PKG_VERSION"));
