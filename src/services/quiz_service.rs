use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    config::ProviderKind,
    constants::quiz_prompt::build_quiz_prompt,
    errors::{AppError, AppResult},
    models::dto::{QuizRequest, QuizResponse},
    services::{generators::QuizGenerator, quiz_parser},
};

pub struct QuizService {
    generator: Arc<dyn QuizGenerator>,
    provider: ProviderKind,
    api_key: Option<SecretString>,
    max_questions: Option<u32>,
}

impl QuizService {
    pub fn new(
        generator: Arc<dyn QuizGenerator>,
        provider: ProviderKind,
        api_key: Option<SecretString>,
        max_questions: Option<u32>,
    ) -> Self {
        Self {
            generator,
            provider,
            api_key,
            max_questions,
        }
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Credential for the selected provider, or the configuration error reported
    /// before anything else about the request is looked at.
    pub fn credential(&self) -> AppResult<&SecretString> {
        self.api_key.as_ref().ok_or_else(|| {
            AppError::Configuration(format!(
                "Missing {} in environment",
                self.provider.credential_var()
            ))
        })
    }

    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<QuizResponse> {
        let api_key = self.credential()?;

        let count = request.question_count(self.max_questions);
        let prompt = build_quiz_prompt(&request, count);

        log::info!(
            "Requesting {} question(s) on '{}' ({}) from {}",
            count,
            request.topic_title,
            request.level,
            self.provider
        );

        let raw = self.generator.generate(api_key, &prompt).await?;
        let quiz = quiz_parser::parse_quiz(&raw)?;

        log::info!("Returning {} question(s) from {}", quiz.len(), self.provider);

        Ok(QuizResponse { quiz })
    }
}
