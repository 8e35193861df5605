//! OpenAI-compatible description generator with template fallback

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::template::TemplateDescriptionGenerator;
use crate::config::OpenAiConfig;
use crate::domain::{DescriptionGenerator, DescriptionRequest, DomainError, JobBrief};
use crate::infrastructure::observability::record_description_generated;

const PROVIDER: &str = "openai";

/// Asks a chat completions endpoint for the description. Any failure, after
/// the configured number of attempts, falls back to the template so callers
/// never see backend errors.
#[derive(Debug, Clone)]
pub struct OpenAiDescriptionGenerator {
    client: reqwest::Client,
    auth_header: String,
    base_url: String,
    model: String,
    max_attempts: u32,
}

/// Outcome of a single failed call
#[derive(Debug)]
enum CallError {
    Retryable(DomainError),
    Fatal(DomainError),
}

impl CallError {
    fn into_inner(self) -> DomainError {
        match self {
            Self::Retryable(e) | Self::Fatal(e) => e,
        }
    }
}

impl OpenAiDescriptionGenerator {
    pub fn new(config: &OpenAiConfig, api_key: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(Duration::from_secs(config.timeout_secs.max(1)))?,
            auth_header: format!("Bearer {}", api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_attempts: config.max_attempts.max(1),
        })
    }

    /// Replace the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DomainError> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn prompt(brief: &JobBrief) -> String {
        let mut prompt = format!(
            "Generate a professional job description for {} at {}. ",
            brief.title,
            brief.company.as_deref().unwrap_or("a company")
        );

        if !brief.skills.is_empty() {
            prompt.push_str(&format!("Required skills: {}. ", brief.skills.join(", ")));
        }

        prompt.push_str("Include responsibilities, qualifications, and benefits.");
        prompt
    }

    fn build_request(&self, brief: &JobBrief) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": Self::prompt(brief) }],
        })
    }

    /// Call the provider, retrying transient failures
    pub async fn complete(&self, brief: &JobBrief) -> Result<String, DomainError> {
        let body = self.build_request(brief);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.call(&body).await {
                Ok(text) => return Ok(text),
                Err(CallError::Retryable(e)) if attempt < self.max_attempts => {
                    debug!(attempt, error = %e, "Retrying description request");
                }
                Err(e) => return Err(e.into_inner()),
            }
        }
    }

    async fn call(&self, body: &serde_json::Value) -> Result<String, CallError> {
        let response = self
            .client
            .post(self.chat_completions_url())
            .header("Authorization", &self.auth_header)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                CallError::Retryable(DomainError::provider(PROVIDER, format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let error = DomainError::provider(PROVIDER, format!("HTTP {}: {}", status, error_body));

            return Err(if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                CallError::Retryable(error)
            } else {
                CallError::Fatal(error)
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            CallError::Fatal(DomainError::provider(
                PROVIDER,
                format!("Failed to parse response: {}", e),
            ))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| CallError::Fatal(DomainError::provider(PROVIDER, "Empty completion")))
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAiDescriptionGenerator {
    async fn generate(&self, request: &DescriptionRequest) -> Result<String, DomainError> {
        let brief = request.validate()?;

        match self.complete(&brief).await {
            Ok(text) => {
                record_description_generated(PROVIDER);
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e, title = %brief.title, "Description provider failed, using template");
                record_description_generated("template_fallback");
                Ok(TemplateDescriptionGenerator::render(&brief))
            }
        }
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
