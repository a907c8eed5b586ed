use rand::Rng;
use rand::rngs::ThreadRng;
use std::sync::Arc;
use tracing::debug;

use trivia_core::Dataset;
use trivia_core::model::{AnswerRecord, QuizEntity, Score};

use super::state::SessionState;
use super::transitions;
use super::view::{QuizView, map_quiz_view};
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One interactive quiz session over a shared dataset.
///
/// Owns its state and random source; the dataset is shared read-only.
pub struct QuizSession<E: QuizEntity, R: Rng = ThreadRng> {
    dataset: Arc<Dataset<E>>,
    state: SessionState<E>,
    rng: R,
}

impl<E: QuizEntity> QuizSession<E> {
    /// Start a session on a random entity using the thread-local random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Options` if the first option set cannot be built.
    pub fn start(dataset: Arc<Dataset<E>>) -> Result<Self, SessionError> {
        Self::start_with_rng(dataset, rand::rng())
    }
}

impl<E: QuizEntity, R: Rng> QuizSession<E, R> {
    /// Start a session on a random entity using the given random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Options` if the first option set cannot be built.
    pub fn start_with_rng(dataset: Arc<Dataset<E>>, mut rng: R) -> Result<Self, SessionError> {
        let state = transitions::start(&dataset, &mut rng)?;
        Ok(Self {
            dataset,
            state,
            rng,
        })
    }

    /// Start a session whose first question is about the entity with `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownEntity` if no entity has that id.
    /// Returns `SessionError::Options` if the first option set cannot be built.
    pub fn start_with_entity(
        dataset: Arc<Dataset<E>>,
        id: E::Id,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let index = dataset
            .position(id)
            .ok_or_else(|| SessionError::UnknownEntity { id: id.to_string() })?;
        let state = transitions::start_at(&dataset, index, &mut rng)?;
        Ok(Self {
            dataset,
            state,
            rng,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset<E> {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &SessionState<E> {
        &self.state
    }

    #[must_use]
    pub fn current_entity(&self) -> &E {
        self.state.entity()
    }

    #[must_use]
    pub fn question_text(&self) -> String {
        self.state.question_text()
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.state.options().as_slice()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.state.is_answered()
    }

    #[must_use]
    pub fn last_correct(&self) -> Option<bool> {
        self.state.last_correct()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.state.score()
    }

    /// Submitted answers, most recent first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &AnswerRecord> {
        self.state.history()
    }

    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` or `SessionError::UnknownOption`.
    pub fn select_option(&mut self, value: &str) -> Result<(), SessionError> {
        transitions::select_option(&mut self.state, value).inspect_err(log_rejected)
    }

    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` or `SessionError::NoSelection`.
    pub fn submit_answer(&mut self) -> Result<AnswerRecord, SessionError> {
        transitions::submit_answer(&mut self.state).inspect_err(log_rejected)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` if the current question is still open.
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        transitions::next_question(&mut self.state, &self.dataset, &mut self.rng)
            .inspect_err(log_rejected)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Options` if the new option set cannot be built.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        transitions::reset(&mut self.state, &self.dataset, &mut self.rng)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self, title: &str) -> QuizView {
        map_quiz_view(title, &self.state)
    }
}

fn log_rejected(err: &SessionError) {
    debug!(%err, "transition rejected");
}
