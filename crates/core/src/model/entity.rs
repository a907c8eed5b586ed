use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Which attribute of the current entity a question asks about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// A year-valued attribute (birth year, release year).
    #[default]
    Numeric,
    /// A label-valued attribute (birth place, composer name).
    Categorical,
}

impl QuestionKind {
    /// Returns the other variant. Questions alternate between the two.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Numeric => Self::Categorical,
            Self::Categorical => Self::Numeric,
        }
    }
}

/// Capabilities the quiz engine needs from a quizzable record.
///
/// Implementors are immutable data; every method is a pure read.
pub trait QuizEntity: Clone + fmt::Debug {
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Display name or title.
    fn label(&self) -> &str;

    /// The year asked about by `QuestionKind::Numeric`.
    fn numeric_attribute(&self) -> i32;

    /// The label asked about by `QuestionKind::Categorical`.
    fn categorical_attribute(&self) -> &str;

    fn question_text(&self, kind: QuestionKind) -> String;

    /// Feedback line shown after a wrong answer.
    fn incorrect_feedback(&self, kind: QuestionKind) -> String;

    /// The correct answer for `kind`, rendered the way options are rendered.
    #[must_use]
    fn correct_answer(&self, kind: QuestionKind) -> String {
        match kind {
            QuestionKind::Numeric => self.numeric_attribute().to_string(),
            QuestionKind::Categorical => self.categorical_attribute().to_string(),
        }
    }
}
