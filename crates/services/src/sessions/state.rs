use serde::Serialize;
use std::collections::VecDeque;

use trivia_core::OptionSet;
use trivia_core::model::{AnswerRecord, QuestionKind, QuizEntity, Score};

/// Whether the current question has been answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    Unanswered,
    Answered { correct: bool },
}

impl QuizPhase {
    #[must_use]
    pub fn is_answered(self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Everything one quiz session knows: the question on screen, the tentative
/// selection, the running score and the answer log.
///
/// Only the functions in `transitions` mutate it.
#[derive(Debug, Clone)]
pub struct SessionState<E: QuizEntity> {
    pub(crate) entity_index: usize,
    pub(crate) entity: E,
    pub(crate) kind: QuestionKind,
    pub(crate) options: OptionSet,
    pub(crate) selection: Option<String>,
    pub(crate) phase: QuizPhase,
    pub(crate) score: Score,
    pub(crate) history: VecDeque<AnswerRecord>,
}

impl<E: QuizEntity> SessionState<E> {
    #[must_use]
    pub fn entity(&self) -> &E {
        &self.entity
    }

    /// Position of the current entity in its dataset.
    #[must_use]
    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    #[must_use]
    pub fn question_kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn question_text(&self) -> String {
        self.entity.question_text(self.kind)
    }

    #[must_use]
    pub fn correct_answer(&self) -> String {
        self.entity.correct_answer(self.kind)
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.phase.is_answered()
    }

    /// Correctness of the submitted answer; `None` until answered.
    #[must_use]
    pub fn last_correct(&self) -> Option<bool> {
        match self.phase {
            QuizPhase::Answered { correct } => Some(correct),
            QuizPhase::Unanswered => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Submitted answers, most recent first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &AnswerRecord> {
        self.history.iter()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
