use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::dto::QuizRequest;

pub const SYSTEM_PROMPT: &str = "You generate IELTS grammar quizzes.";

pub const TEMPERATURE: f64 = 0.6;

static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("MARKUP_TAG is a valid regex pattern"));

/// Removes anything that looks like an HTML tag, keeping the text between tags.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Builds the user prompt for a quiz of `count` questions.
pub fn build_quiz_prompt(request: &QuizRequest, count: u32) -> String {
    let points = request
        .points
        .iter()
        .map(|p| strip_markup(p))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
You are an IELTS grammar quiz generator.

Topic: {topic}
Level: {level}
Core formula: {summary}
Key points:
{points}

Generate {count} multiple choice questions.

Rules:
- Each question must test grammar accuracy
- Provide 4 options
- Exactly 1 correct answer
- Return ONLY JSON format:

{{
 "quiz":[
   {{"question":"...", "options":["A","B","C","D"], "correct":0}}
 ]
}}
"#,
        topic = request.topic_title,
        level = request.level,
        summary = request.theory_summary,
        points = points,
        count = count,
    )
}
