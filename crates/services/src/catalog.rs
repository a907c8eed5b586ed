use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use trivia_core::catalog::{composer_dataset, movie_dataset};
use trivia_core::model::{AnswerRecord, Composer, Movie, Score};
use trivia_core::Clock;

use crate::error::SessionError;
use crate::sessions::{QuizSession, QuizView};

/// The quizzes this app ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    Composer,
    Movie,
}

impl QuizKind {
    /// Home-menu order.
    pub const ALL: [QuizKind; 2] = [QuizKind::Movie, QuizKind::Composer];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Composer => "Composer Quiz",
            Self::Movie => "Movie Music Quiz",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Composer => "When and where were the great film composers born?",
            Self::Movie => "Release years and composers of classic film scores.",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A running session of either quiz, behind one interface.
pub enum AnyQuizSession {
    Composer(QuizSession<Composer>),
    Movie(QuizSession<Movie>),
}

impl AnyQuizSession {
    /// Load the quiz's dataset and start a session on a random entity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` if the dataset fails validation.
    /// Returns `SessionError::Options` if the first option set cannot be built.
    pub fn start(kind: QuizKind, clock: &Clock) -> Result<Self, SessionError> {
        let session = match kind {
            QuizKind::Composer => {
                Self::Composer(QuizSession::start(Arc::new(composer_dataset()?))?)
            }
            QuizKind::Movie => Self::Movie(QuizSession::start(Arc::new(movie_dataset(clock)?))?),
        };
        tracing::info!(quiz = %kind, "quiz started");
        Ok(session)
    }

    #[must_use]
    pub fn kind(&self) -> QuizKind {
        match self {
            Self::Composer(_) => QuizKind::Composer,
            Self::Movie(_) => QuizKind::Movie,
        }
    }

    /// # Errors
    ///
    /// See [`QuizSession::select_option`].
    pub fn select_option(&mut self, value: &str) -> Result<(), SessionError> {
        match self {
            Self::Composer(session) => session.select_option(value),
            Self::Movie(session) => session.select_option(value),
        }
    }

    /// # Errors
    ///
    /// See [`QuizSession::submit_answer`].
    pub fn submit_answer(&mut self) -> Result<AnswerRecord, SessionError> {
        match self {
            Self::Composer(session) => session.submit_answer(),
            Self::Movie(session) => session.submit_answer(),
        }
    }

    /// # Errors
    ///
    /// See [`QuizSession::next_question`].
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Composer(session) => session.next_question(),
            Self::Movie(session) => session.next_question(),
        }
    }

    /// # Errors
    ///
    /// See [`QuizSession::reset`].
    pub fn reset(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Composer(session) => session.reset(),
            Self::Movie(session) => session.reset(),
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        match self {
            Self::Composer(session) => session.score(),
            Self::Movie(session) => session.score(),
        }
    }

    /// Submitted answers, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<AnswerRecord> {
        match self {
            Self::Composer(session) => session.history().cloned().collect(),
            Self::Movie(session) => session.history().cloned().collect(),
        }
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        let title = self.kind().title();
        match self {
            Self::Composer(session) => session.view(title),
            Self::Movie(session) => session.view(title),
        }
    }
}
