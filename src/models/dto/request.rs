use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Quiz parameters sent by the caller. Field names follow the public JSON contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[serde(default)]
    pub topic_title: String,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub theory_summary: String,

    pub points: Vec<String>,

    #[serde(default)]
    pub num_questions: Option<Value>,
}

impl QuizRequest {
    /// Number of questions to ask the model for.
    ///
    /// Accepts numbers and numeric strings. Fractions are truncated. Anything
    /// absent, falsy, non-numeric or below one falls back to five. When a cap
    /// is configured, larger values are clamped to it with a warning.
    pub fn question_count(&self, max: Option<u32>) -> u32 {
        let requested = match &self.num_questions {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        let count = match requested {
            Some(n) if n.is_finite() && n >= 1.0 => n.trunc() as u32,
            _ => return DEFAULT_QUESTION_COUNT,
        };

        match max {
            Some(max) if count > max => {
                log::warn!(
                    "numQuestions {} exceeds QUIZ_MAX_QUESTIONS, clamping to {}",
                    count,
                    max
                );
                max
            }
            _ => count,
        }
    }
}
