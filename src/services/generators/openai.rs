use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::quiz_prompt::{SYSTEM_PROMPT, TEMPERATURE},
    errors::{AppError, AppResult},
    services::generators::QuizGenerator,
};

/// Chat-completion style provider.
pub struct OpenAiGenerator {
    http_client: reqwest::Client,
    api_base: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(
        http_client: reqwest::Client,
        api_base: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    fn client(&self, api_key: &SecretString) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_base(self.api_base.trim_end_matches('/'))
            .with_api_key(api_key.expose_secret());
        Client::with_config(config)
            .with_http_client(self.http_client.clone())
            .with_backoff(single_attempt())
    }
}

/// Backoff that gives up after the first attempt; failures go straight to the caller.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

pub fn chat_request_body(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt }
        ],
        "temperature": TEMPERATURE
    })
}

pub fn extract_chat_content(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl QuizGenerator for OpenAiGenerator {
    async fn generate(&self, api_key: &SecretString, prompt: &str) -> AppResult<String> {
        let response: Value = self
            .client(api_key)
            .chat()
            .create_byot(chat_request_body(&self.model, prompt))
            .await?;

        extract_chat_content(&response).ok_or_else(|| {
            AppError::Unexpected("Chat completion response has no message content".to_string())
        })
    }
}
