use async_trait::async_trait;
use secrecy::SecretString;

use crate::errors::AppResult;

pub mod gemini;
pub mod openai;

pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;

/// Text generation capability of an external model provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Sends `prompt` and returns the raw generated text.
    ///
    /// Non-success statuses and transport failures become `AppError::Provider`.
    async fn generate(&self, api_key: &SecretString, prompt: &str) -> AppResult<String>;
}
