use secrecy::SecretString;

use crate::client::consts::{BASE_URL, MESSAGEBIRD_API_KEY, USER_AGENT};

#[derive(Debug)]
pub struct Config {
    base_url: String,
    api_key: SecretString,
    user_agent: String,
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.config.api_key = SecretString::from(api_key.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults, with the access key taken from `MESSAGEBIRD_API_KEY`.
    ///
    /// A missing key is not an error here; the platform rejects the request instead.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: std::env::var(MESSAGEBIRD_API_KEY)
                .unwrap_or_default()
                .into(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Like [`Config::new`], but loads a `.env` file first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
