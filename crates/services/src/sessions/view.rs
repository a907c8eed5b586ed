use serde::Serialize;

use trivia_core::model::{AnswerRecord, QuizEntity, Score};

use super::state::SessionState;

/// Shown in history when an answer was submitted empty.
pub const NO_ANSWER_LABEL: &str = "(no answer)";

/// Shown after a correct submission.
pub const CORRECT_FEEDBACK: &str = "Correct!";

/// One line of the answer log, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItemView {
    pub question: String,
    pub user_answer: String,
    pub correct: bool,
    /// Present only for incorrect answers.
    pub correct_answer: Option<String>,
}

/// Plain-data snapshot of a quiz session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub title: String,
    pub question: String,
    pub options: Vec<String>,
    pub selection: Option<String>,
    pub answered: bool,
    /// Meaningful only when `answered`.
    pub correct: Option<bool>,
    pub feedback: Option<String>,
    pub score: Score,
    pub score_label: String,
    pub history: Vec<HistoryItemView>,
}

impl QuizView {
    /// Submit is allowed only with a selection on an open question.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.answered && self.selection.is_some()
    }
}

#[must_use]
pub fn map_history_item(record: &AnswerRecord) -> HistoryItemView {
    let user_answer = if record.user_answer().is_empty() {
        NO_ANSWER_LABEL.to_string()
    } else {
        record.user_answer().to_string()
    };
    let correct_answer = if record.is_correct() {
        None
    } else {
        Some(record.correct_answer().to_string())
    };

    HistoryItemView {
        question: record.question().to_string(),
        user_answer,
        correct: record.is_correct(),
        correct_answer,
    }
}

#[must_use]
pub fn map_quiz_view<E: QuizEntity>(title: &str, state: &SessionState<E>) -> QuizView {
    let correct = state.last_correct();
    let feedback = correct.map(|correct| {
        if correct {
            CORRECT_FEEDBACK.to_string()
        } else {
            state.entity().incorrect_feedback(state.question_kind())
        }
    });

    QuizView {
        title: title.to_string(),
        question: state.question_text(),
        options: state.options().as_slice().to_vec(),
        selection: state.selection().map(str::to_string),
        answered: state.is_answered(),
        correct,
        feedback,
        score: state.score(),
        score_label: state.score().to_string(),
        history: state.history().map(map_history_item).collect(),
    }
}
