#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use trivia_core::Clock;

pub use catalog::{AnyQuizSession, QuizKind};
pub use error::SessionError;

pub use sessions::{
    HistoryItemView, QuizPhase, QuizSession, QuizView, SessionState, map_quiz_view,
};
