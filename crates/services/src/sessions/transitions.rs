//! State transitions for a quiz session.
//!
//! Each function takes the session state by reference and either applies the
//! whole transition or returns an error without touching the state.

use rand::Rng;
use std::collections::VecDeque;
use tracing::debug;

use trivia_core::Dataset;
use trivia_core::model::{AnswerRecord, QuestionKind, QuizEntity, Score};

use super::state::{QuizPhase, SessionState};
use crate::error::SessionError;

/// Begin a session on a uniformly random entity with the default question kind.
///
/// # Errors
///
/// Returns `SessionError::Options` if options cannot be generated.
pub fn start<E: QuizEntity, R: Rng + ?Sized>(
    dataset: &Dataset<E>,
    rng: &mut R,
) -> Result<SessionState<E>, SessionError> {
    let index = pick_index(rng, dataset.len(), None);
    start_at(dataset, index, rng)
}

/// Begin a session on the entity at `index`.
///
/// # Errors
///
/// Returns `SessionError::UnknownEntity` if `index` is out of range.
/// Returns `SessionError::Options` if options cannot be generated.
pub fn start_at<E: QuizEntity, R: Rng + ?Sized>(
    dataset: &Dataset<E>,
    index: usize,
    rng: &mut R,
) -> Result<SessionState<E>, SessionError> {
    let kind = QuestionKind::default();
    let (entity, options) = pose(dataset, index, kind, rng)?;
    debug!(entity = %entity.id(), ?kind, "session started");

    Ok(SessionState {
        entity_index: index,
        entity,
        kind,
        options,
        selection: None,
        phase: QuizPhase::Unanswered,
        score: Score::new(),
        history: VecDeque::new(),
    })
}

/// Record a tentative selection, replacing any earlier one.
///
/// # Errors
///
/// Returns `SessionError::AlreadyAnswered` once the question is answered.
/// Returns `SessionError::UnknownOption` if `value` is not a current option.
pub fn select_option<E: QuizEntity>(
    state: &mut SessionState<E>,
    value: &str,
) -> Result<(), SessionError> {
    if state.phase.is_answered() {
        return Err(SessionError::AlreadyAnswered);
    }
    if !state.options.contains(value) {
        return Err(SessionError::UnknownOption {
            value: value.to_string(),
        });
    }
    state.selection = Some(value.to_string());
    Ok(())
}

/// Grade the tentative selection, update the score and log the answer.
///
/// # Errors
///
/// Returns `SessionError::AlreadyAnswered` if the question was already submitted.
/// Returns `SessionError::NoSelection` if nothing is selected.
pub fn submit_answer<E: QuizEntity>(
    state: &mut SessionState<E>,
) -> Result<AnswerRecord, SessionError> {
    if state.phase.is_answered() {
        return Err(SessionError::AlreadyAnswered);
    }
    let Some(selection) = state.selection.as_deref() else {
        return Err(SessionError::NoSelection);
    };

    let record = AnswerRecord::new(state.question_text(), selection, state.correct_answer());
    let correct = record.is_correct();

    state.score.record(correct);
    state.history.push_front(record.clone());
    state.phase = QuizPhase::Answered { correct };
    debug!(
        entity = %state.entity.id(),
        correct,
        score = %state.score,
        "answer submitted"
    );
    Ok(record)
}

/// Move to a different entity and the other question kind.
///
/// # Errors
///
/// Returns `SessionError::NotAnswered` if the current question is still open.
/// Returns `SessionError::Options` if options cannot be generated.
pub fn next_question<E: QuizEntity, R: Rng + ?Sized>(
    state: &mut SessionState<E>,
    dataset: &Dataset<E>,
    rng: &mut R,
) -> Result<(), SessionError> {
    if !state.phase.is_answered() {
        return Err(SessionError::NotAnswered);
    }

    let index = pick_index(rng, dataset.len(), Some(state.entity_index));
    let kind = state.kind.toggled();
    let (entity, options) = pose(dataset, index, kind, rng)?;

    state.entity_index = index;
    state.entity = entity;
    state.kind = kind;
    state.options = options;
    state.selection = None;
    state.phase = QuizPhase::Unanswered;
    debug!(entity = %state.entity.id(), ?kind, "next question");
    Ok(())
}

/// Clear score and history and start over on a random entity.
///
/// The new entity may be the same as the current one.
///
/// # Errors
///
/// Returns `SessionError::Options` if options cannot be generated.
pub fn reset<E: QuizEntity, R: Rng + ?Sized>(
    state: &mut SessionState<E>,
    dataset: &Dataset<E>,
    rng: &mut R,
) -> Result<(), SessionError> {
    let index = pick_index(rng, dataset.len(), None);
    let kind = QuestionKind::default();
    let (entity, options) = pose(dataset, index, kind, rng)?;

    state.entity_index = index;
    state.entity = entity;
    state.kind = kind;
    state.options = options;
    state.selection = None;
    state.phase = QuizPhase::Unanswered;
    state.score = Score::new();
    state.history.clear();
    debug!(entity = %state.entity.id(), "session reset");
    Ok(())
}

fn pose<E: QuizEntity, R: Rng + ?Sized>(
    dataset: &Dataset<E>,
    index: usize,
    kind: QuestionKind,
    rng: &mut R,
) -> Result<(E, trivia_core::OptionSet), SessionError> {
    let entity = dataset
        .get(index)
        .ok_or_else(|| SessionError::UnknownEntity {
            id: format!("#{index}"),
        })?
        .clone();
    let options = dataset.options_for(rng, &entity, kind)?;
    Ok((entity, options))
}

/// Uniform draw from `0..len`, skipping `avoid` when there is anything else to pick.
///
/// `len` must be non-zero.
fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize, avoid: Option<usize>) -> usize {
    match avoid {
        Some(current) if len > 1 && current < len => {
            let draw = rng.random_range(0..len - 1);
            if draw >= current { draw + 1 } else { draw }
        }
        _ => rng.random_range(0..len),
    }
}
