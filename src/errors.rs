use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Configuration(String),

    #[error("Provider request failed")]
    Provider { detail: Value },

    #[error("Model returned invalid JSON")]
    MalformedResponse { raw: String },

    #[error("Invalid quiz format")]
    InvalidFormat { raw: String },

    #[error("Server error")]
    Unexpected(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Provider { .. } => "PROVIDER_ERROR",
            AppError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            AppError::InvalidFormat { .. } => "INVALID_FORMAT",
            AppError::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    /// Diagnostic payload attached to the error body, if any.
    pub fn detail(&self) -> Option<Value> {
        match self {
            AppError::MethodNotAllowed | AppError::Configuration(_) => None,
            AppError::Provider { detail } => Some(detail.clone()),
            AppError::MalformedResponse { raw } | AppError::InvalidFormat { raw } => {
                Some(Value::String(raw.clone()))
            }
            AppError::Unexpected(message) => Some(Value::String(message.clone())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        ErrorResponse {
            error: err.to_string(),
            detail: err.detail(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MethodNotAllowed => log::warn!("[{}] {}", self.error_code(), self),
            _ => log::error!("[{}] {}", self.error_code(), self),
        }

        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, AppError::MethodNotAllowed) {
            response.insert_header((header::ALLOW, "POST"));
        }
        response.json(ErrorResponse::from(self))
    }
}

/// The request URL is stripped so endpoint details never reach callers or logs.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Provider {
            detail: Value::String(err.without_url().to_string()),
        }
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;

        let detail = match err {
            OpenAIError::ApiError(api) => serde_json::json!({
                "message": api.message,
                "type": api.r#type,
                "param": api.param,
                "code": api.code,
            }),
            other => Value::String(other.to_string()),
        };
        AppError::Provider { detail }
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
