use std::{env, fmt, str::FromStr};

use secrecy::SecretString;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Which generative-text API the relay talks to. Fixed for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    /// Name of the environment variable holding this provider's credential.
    pub fn credential_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub provider: ProviderKind,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub gemini_api_key: Option<SecretString>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub gemini_max_output_tokens: u32,
    pub max_questions: Option<u32>,
    pub cors_allowed_origin: Option<String>,
}

/// Empty values count as unset, same as an absent variable.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            provider: env::var("QUIZ_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(ProviderKind::OpenAi),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            gemini_api_key: non_empty_var("GEMINI_API_KEY").map(SecretString::from),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2048),
            max_questions: env::var("QUIZ_MAX_QUESTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &u32| *n > 0),
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
        }
    }

    /// Credential of the selected provider, if configured.
    pub fn api_key(&self) -> Option<SecretString> {
        match self.provider {
            ProviderKind::OpenAi => self.openai_api_key.clone(),
            ProviderKind::Gemini => self.gemini_api_key.clone(),
        }
    }

    /// Logs what is missing instead of refusing to start; requests report it.
    pub fn warn_if_incomplete(&self) {
        if self.api_key().is_none() {
            log::warn!(
                "{} is not set; every quiz request will fail until it is configured",
                self.provider.credential_var()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            provider: ProviderKind::OpenAi,
            openai_api_key: Some(SecretString::from("sk-test".to_string())),
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            gemini_api_key: None,
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_max_output_tokens: 2048,
            max_questions: None,
            cors_allowed_origin: None,
        }
    }
}
