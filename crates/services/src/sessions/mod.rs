mod service;
mod state;
pub mod transitions;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::QuizSession;
pub use state::{QuizPhase, SessionState};
pub use view::{
    CORRECT_FEEDBACK, HistoryItemView, NO_ANSWER_LABEL, QuizView, map_history_item, map_quiz_view,
};
