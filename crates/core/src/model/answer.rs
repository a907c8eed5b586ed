use serde::{Deserialize, Serialize};

/// Immutable log entry for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    question: String,
    user_answer: String,
    correct_answer: String,
    correct: bool,
}

impl AnswerRecord {
    /// Build a record, deriving correctness by exact string equality.
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        user_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        let user_answer = user_answer.into();
        let correct_answer = correct_answer.into();
        let correct = user_answer == correct_answer;
        Self {
            question: question.into(),
            user_answer,
            correct_answer,
            correct,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}
