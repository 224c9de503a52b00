//! OpenAI implementation of the AI trait.
//!
//! A single chat-completion request per extraction: low temperature, small
//! output cap, and a prompt demanding exactly a 4-key JSON object. Models
//! like to wrap JSON in markdown fences, so the response is unfenced before
//! parsing.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LlmJobFields, AI};
use crate::error::{ExtractionError, Result};
use crate::security::LlmCredentials;
use crate::types::ExtractionConfig;

/// OpenAI-based fallback extractor.
#[derive(Debug, Clone)]
pub struct OpenAI {
    client: Client,
    credentials: LlmCredentials,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAI {
    /// Create a new client with the given credentials.
    pub fn new(credentials: LlmCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            temperature: 0.3,
            max_tokens: 200,
        }
    }

    /// Build from an [`ExtractionConfig`]; `None` when no credentials are
    /// configured (the pipeline then skips the fallback entirely).
    pub fn from_config(config: &ExtractionConfig) -> Option<Self> {
        config.credentials.clone().map(|credentials| Self {
            client: Client::new(),
            credentials,
            temperature: config.temperature,
            max_tokens: config.max_output_tokens,
        })
    }

    /// Set the sampling temperature (default: 0.3).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token cap (default: 200).
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }

    fn prompt(description: &str) -> String {
        format!(
            r#"Extract job details from the description below.

Respond with ONLY a JSON object with exactly these keys:
{{"title": string or null, "company": string or null, "location": string or null, "salary": string or null}}

Use only information present in the text. If a field is not stated, use null. Do not guess.

Description:
{description}"#
        )
    }

    /// Make the chat completion request.
    async fn chat(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.credentials.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.credentials.base_url))
            .header(
                "Authorization",
                format!("Bearer {}", self.credentials.api_key.expose()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractionError::AI(e.to_string().into()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractionError::AI(
                format!("OpenAI API error: {}", error_text).into(),
            ));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::AI(e.to_string().into()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ExtractionError::AI("No response from OpenAI".into()))
    }
}

/// Strip a markdown code fence wrapping, if present.
fn unfence(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[async_trait]
impl AI for OpenAI {
    async fn extract_job_fields(&self, description: &str) -> Result<LlmJobFields> {
        let response = self.chat(&Self::prompt(description)).await?;
        let fields: LlmJobFields = serde_json::from_str(unfence(&response))?;
        Ok(fields)
    }
}

// Request/Response types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}
