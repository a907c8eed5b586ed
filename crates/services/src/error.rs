//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::OptionError;

/// Errors emitted by quiz sessions.
///
/// Every rejected transition leaves the session state untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question already answered")]
    AlreadyAnswered,
    #[error("no option selected")]
    NoSelection,
    #[error("question not answered yet")]
    NotAnswered,
    #[error("not one of the current options: {value}")]
    UnknownOption { value: String },
    #[error("no entity with id {id}")]
    UnknownEntity { id: String },
    #[error(transparent)]
    Options(#[from] OptionError),
    #[error(transparent)]
    Core(#[from] trivia_core::Error),
}
