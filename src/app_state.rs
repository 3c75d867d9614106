use std::sync::Arc;

use crate::{
    config::{Config, ProviderKind},
    services::{
        generators::{GeminiGenerator, OpenAiGenerator, QuizGenerator},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http_client = reqwest::Client::new();
        let generator: Arc<dyn QuizGenerator> = match config.provider {
            ProviderKind::OpenAi => Arc::new(OpenAiGenerator::new(
                http_client,
                config.openai_api_base.clone(),
                config.openai_model.clone(),
            )),
            ProviderKind::Gemini => Arc::new(GeminiGenerator::new(
                http_client,
                config.gemini_api_base.clone(),
                config.gemini_model.clone(),
                config.gemini_max_output_tokens,
            )),
        };

        Self::with_generator(config, generator)
    }

    /// Builds the state around an already constructed generator.
    pub fn with_generator(config: Config, generator: Arc<dyn QuizGenerator>) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            generator,
            config.provider,
            config.api_key(),
            config.max_questions,
        ));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
