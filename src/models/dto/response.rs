use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
}
