use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// One multiple-choice question as handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizQuestion {
    #[validate(length(min = 1))]
    pub question: String,

    #[validate(length(equal = 4))]
    pub options: Vec<String>,

    #[validate(range(min = 0, max = 3))]
    pub correct: i64,
}

impl QuizQuestion {
    /// Coerces a loosely typed model entry into a question.
    ///
    /// The question text is trimmed, options are stringified and `correct` is
    /// read as an integer. Entries that still break the shape rules (empty
    /// question, not exactly four options, index outside 0..=3) yield `None`.
    pub fn from_model_value(value: &Value) -> Option<Self> {
        let question = value.get("question")?.as_str()?.trim().to_string();

        let options = value
            .get("options")?
            .as_array()?
            .iter()
            .map(option_text)
            .collect();

        let correct = value.get("correct").and_then(coerce_index)?;

        let candidate = QuizQuestion {
            question,
            options,
            correct,
        };
        candidate.validate().ok()?;
        Some(candidate)
    }
}

fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_index(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
