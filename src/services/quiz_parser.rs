use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

/// Removes every ```` ```json ```` and ```` ``` ```` marker from the text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses model output as JSON, retrying once without code fences.
pub fn parse_model_json(raw: &str) -> AppResult<Value> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    serde_json::from_str(&strip_code_fences(raw)).map_err(|e| {
        log::debug!("Model output is not JSON after fence stripping: {}", e);
        AppError::MalformedResponse {
            raw: raw.to_string(),
        }
    })
}

/// Turns raw model output into the list of valid questions.
///
/// Fails when the text is not JSON or carries no `quiz` array. Individual
/// entries that cannot be coerced into a valid question are dropped.
pub fn parse_quiz(raw: &str) -> AppResult<Vec<QuizQuestion>> {
    let value = parse_model_json(raw)?;

    let entries = value
        .get("quiz")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::InvalidFormat {
            raw: raw.to_string(),
        })?;

    let quiz: Vec<QuizQuestion> = entries
        .iter()
        .filter_map(QuizQuestion::from_model_value)
        .collect();

    let dropped = entries.len() - quiz.len();
    if dropped > 0 {
        log::warn!(
            "Dropped {} malformed question(s) out of {} returned by the model",
            dropped,
            entries.len()
        );
    }

    Ok(quiz)
}
