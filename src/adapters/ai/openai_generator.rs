//! OpenAI Generator - ArtifactGenerator implementation for OpenAI's API.
//!
//! Calls the chat completions endpoint in JSON mode and parses the reply
//! into a `GeneratedSystem`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let generator = OpenAIGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::chat::SystemData;
use crate::domain::system::{GeneratedSystem, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
use crate::ports::{ArtifactGenerator, GenerationError};

/// Persona and output contract sent as the system message.
const SYSTEM_PROMPT: &str = "Você é o Salomão, especialista em criar sistemas de vendas \
     personalizados. Responda sempre em JSON válido.";

/// Placeholder for questionnaire answers the user never gave.
const UNANSWERED: &str = "não informado";

/// Configuration for the OpenAI generator.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-backed artifact generator.
pub struct OpenAIGenerator {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: OpenAIConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Builds the user prompt from the collected answers.
    ///
    /// The JSON shape in the prompt mirrors `GeneratedSystem`, so the
    /// reply deserializes directly.
    fn user_prompt(profile: &SystemData) -> String {
        format!(
            r#"Você é o Salomão, especialista em sistemas de vendas. Baseado nos dados abaixo, crie um sistema personalizado:

- Público-alvo: {target_audience}
- Meta de emagrecimento: {weight_goal}
- Principal desafio: {main_challenge}
- Método de conversão: {conversion_method}
- Automação SDR: {sdr_automation}

Responda em JSON com:
{{
  "name": "Nome do sistema",
  "description": "Descrição em 1 linha",
  "features": ["feature1", "feature2", "feature3"],
  "conversionRate": "taxa estimada em %",
  "template": "template_id_sugerido",
  "preview": {{
    "title": "Título da landing page",
    "subtitle": "Subtítulo",
    "buttonText": "Texto do botão principal",
    "colors": {{
      "primary": "{primary}",
      "secondary": "{secondary}"
    }}
  }}
}}"#,
            target_audience = profile.target_audience().unwrap_or(UNANSWERED),
            weight_goal = profile.weight_goal().unwrap_or(UNANSWERED),
            main_challenge = profile.main_challenge().unwrap_or(UNANSWERED),
            conversion_method = profile.conversion_method().unwrap_or(UNANSWERED),
            sdr_automation = profile.sdr_automation().unwrap_or(UNANSWERED),
            primary = DEFAULT_PRIMARY_COLOR,
            secondary = DEFAULT_SECONDARY_COLOR,
        )
    }

    /// Converts a profile to the OpenAI request body.
    fn to_openai_request(&self, profile: &SystemData) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(profile),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
            temperature: 0.7,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, profile: &SystemData) -> Result<Response, GenerationError> {
        let request = self.to_openai_request(profile);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, GenerationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(GenerationError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(GenerationError::rate_limited(retry_after))
            }
            400 => Err(GenerationError::invalid_request(error_body)),
            500..=599 => Err(GenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI includes retry-after in the error message sometimes
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    /// Parses the reply body into an artifact.
    async fn parse_response(&self, response: Response) -> Result<GeneratedSystem, GenerationError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response.json().await.map_err(|e| {
            GenerationError::malformed_output(format!("Failed to parse response: {}", e))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::malformed_output("No choices in response"))?;

        Self::artifact_from_content(&choice.message.content)
    }

    /// Deserializes the JSON-mode message content into an artifact.
    fn artifact_from_content(content: &str) -> Result<GeneratedSystem, GenerationError> {
        let artifact: GeneratedSystem = serde_json::from_str(content).map_err(|e| {
            GenerationError::malformed_output(format!("Reply is not valid JSON: {}", e))
        })?;

        if artifact.is_unusable() {
            return Err(GenerationError::malformed_output(
                "Reply parsed but has no system name",
            ));
        }

        Ok(artifact)
    }
}

#[async_trait]
impl ArtifactGenerator for OpenAIGenerator {
    async fn generate(&self, profile: &SystemData) -> Result<GeneratedSystem, GenerationError> {
        let mut last_error = GenerationError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(profile).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(artifact) => return Ok(artifact),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    response_format: ResponseFormat,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}
