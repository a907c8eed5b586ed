use serde::{Deserialize, Serialize};

use crate::model::entity::{QuestionKind, QuizEntity};
use crate::model::ids::ComposerId;

/// A film composer with the facts the composer quiz asks about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composer {
    id: ComposerId,
    name: String,
    birth_year: i32,
    birth_place: String,
}

impl Composer {
    #[must_use]
    pub fn new(
        id: ComposerId,
        name: impl Into<String>,
        birth_year: i32,
        birth_place: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year,
            birth_place: birth_place.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    #[must_use]
    pub fn birth_place(&self) -> &str {
        &self.birth_place
    }
}

impl QuizEntity for Composer {
    type Id = ComposerId;

    fn id(&self) -> ComposerId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn numeric_attribute(&self) -> i32 {
        self.birth_year
    }

    fn categorical_attribute(&self) -> &str {
        &self.birth_place
    }

    fn question_text(&self, kind: QuestionKind) -> String {
        match kind {
            QuestionKind::Numeric => format!("When was {} born?", self.name),
            QuestionKind::Categorical => format!("Where was {} born?", self.name),
        }
    }

    fn incorrect_feedback(&self, kind: QuestionKind) -> String {
        match kind {
            QuestionKind::Numeric => {
                format!("Incorrect. {} was born in {}.", self.name, self.birth_year)
            }
            QuestionKind::Categorical => {
                format!("Incorrect. {} was born in {}.", self.name, self.birth_place)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herrmann() -> Composer {
        Composer::new(ComposerId::new(1), "Bernard Herrmann", 1911, "New York City, USA")
    }

    #[test]
    fn composer_question_texts() {
        let composer = herrmann();
        assert_eq!(
            composer.question_text(QuestionKind::Numeric),
            "When was Bernard Herrmann born?"
        );
        assert_eq!(
            composer.question_text(QuestionKind::Categorical),
            "Where was Bernard Herrmann born?"
        );
    }

    #[test]
    fn composer_correct_answers_render_as_options() {
        let composer = herrmann();
        assert_eq!(composer.correct_answer(QuestionKind::Numeric), "1911");
        assert_eq!(
            composer.correct_answer(QuestionKind::Categorical),
            "New York City, USA"
        );
        assert_eq!(
            composer.incorrect_feedback(QuestionKind::Categorical),
            "Incorrect. Bernard Herrmann was born in New York City, USA."
        );
    }
}
