use serde::Serialize;

use services::{AnyQuizSession, QuizKind};
use trivia_core::model::AnswerRecord;

/// End-of-session report printed by `--summary-json`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub quiz: QuizKind,
    pub correct: u32,
    pub attempted: u32,
    pub percent: u32,
    pub history: Vec<AnswerRecord>,
}

impl SessionSummary {
    #[must_use]
    pub fn from_session(session: &AnyQuizSession) -> Self {
        let score = session.score();
        Self {
            quiz: session.kind(),
            correct: score.correct(),
            attempted: score.attempted(),
            percent: score.percent(),
            history: session.history(),
        }
    }
}
