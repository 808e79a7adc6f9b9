//! Settings for the OpenAI-backed generator.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Required; the scripted fallback only covers
    /// request failures, not a missing credential.
    pub openai_api_key: Option<String>,

    /// Chat completion model used to draft sales systems.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, overridable to point at a proxy.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds allowed per completion request.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Attempts before the scripted fallback takes over.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when a non-empty key is present.
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}
