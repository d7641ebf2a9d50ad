//! Gemini API client
//!
//! A thin client for the `generateContent` endpoint of Google's
//! generative-language API. The client is constructed once at startup from
//! [`Config`] and passed by reference wherever a request is made; there is
//! no hidden process-wide instance.

use crate::config::Config;
use crate::error::SuggestError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// HTTP timeout for generation requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// The inner reqwest client pools connections, so one instance serves
    /// the whole process.
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .user_agent(concat!("muse/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail");

        Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
        }
    }

    /// Model identifier requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a generation request and return the reply text.
    ///
    /// The key travels in the `x-goog-api-key` header so request URLs stay
    /// safe to log.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, SuggestError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, model = %self.model, "Generation API error");
            return Err(SuggestError::Api { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or(SuggestError::EmptyResponse)
    }
}

/// Request payload for the generateContent API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request with a single user message
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(text)],
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Set the system instruction
    pub fn system_instruction(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::bare(text));
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens in the response
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .max_output_tokens = Some(tokens);
        self
    }

    /// Set the thinking budget.
    ///
    /// Capping output tokens on thinking-capable models without also
    /// bounding the thinking budget can starve the visible reply.
    pub fn thinking_budget(mut self, budget: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .thinking_config = Some(ThinkingConfig {
            thinking_budget: budget,
        });
        self
    }
}

/// A message in the conversation
#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    /// User-role content with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Role-less content, as used for the system instruction
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Text content within a message
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation parameters
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

/// Thinking budget configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all parts concatenated.
    ///
    /// Returns `None` when the response carries no candidates or no text
    /// parts, which the caller reports as an empty-response error.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect(),
        )
    }
}

/// A single generated candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

/// Content block within a candidate
#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_camel_case() {
        let request = GenerateContentRequest::user_text("Hello")
            .system_instruction("You are helpful")
            .temperature(0.7)
            .max_output_tokens(300)
            .thinking_budget(100);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            "You are helpful"
        );
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 300);
        assert_eq!(
            value["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            100
        );
    }

    #[test]
    fn test_unset_parameters_are_omitted() {
        let request = GenerateContentRequest::user_text("Hello");
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("systemInstruction").is_none());
        assert!(value.get("generationConfig").is_none());
        // The system instruction has no role, so bare contents must not
        // serialize a null one either
        let request = GenerateContentRequest::user_text("Hi").system_instruction("sys");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "1. First\n"}, {"text": "2. Second"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("1. First\n2. Second"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());

        let json = r#"{"candidates": [{"content": {}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }
}
