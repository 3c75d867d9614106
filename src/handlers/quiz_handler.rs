use actix_web::{get, web, Error, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::QuizRequest};

pub const GENERATE_QUIZ_PATH: &str = "/api/generate-quiz";

const JSON_BODY_LIMIT: usize = 256 * 1024;

/// The credential is checked before the body, so a misconfigured relay reports
/// that regardless of what the client sent.
async fn generate_quiz(
    state: web::Data<AppState>,
    request: Result<web::Json<QuizRequest>, Error>,
) -> Result<HttpResponse, Error> {
    state.quiz_service.credential()?;
    let request = request?.into_inner();

    let response = state.quiz_service.generate_quiz(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.quiz_service.provider().to_string()
    }))
}

/// Request bodies that fail to deserialize are reported like any other server error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .content_type_required(false)
        .error_handler(|err, _req| AppError::from(err).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource(GENERATE_QUIZ_PATH)
                .route(web::post().to(generate_quiz))
                .default_service(web::to(method_not_allowed)),
        )
        .service(health_check);
}
