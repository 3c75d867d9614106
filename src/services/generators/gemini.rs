use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::quiz_prompt::TEMPERATURE,
    errors::{AppError, AppResult},
    services::generators::QuizGenerator,
};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its parts concatenated.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.parts;
        if parts.is_empty() {
            return None;
        }
        Some(parts.iter().map(|p| p.text.as_str()).collect())
    }
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// generateContent style provider.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_base: String,
    model: String,
    max_output_tokens: u32,
}

impl GeminiGenerator {
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        model: impl Into<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            model: model.into(),
            max_output_tokens,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl QuizGenerator for GeminiGenerator {
    async fn generate(&self, api_key: &SecretString, prompt: &str) -> AppResult<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&GenerateContentRequest::new(prompt, self.max_output_tokens))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                log::error!("Failed to reach Gemini: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Gemini responded with status {}", status);
            let detail = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
            return Err(AppError::Provider { detail });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::Unexpected(format!("Failed to parse Gemini response: {}", e))
        })?;

        parsed.text().ok_or_else(|| {
            AppError::Unexpected("Gemini response has no candidate text".to_string())
        })
    }
}
