use serde::{Deserialize, Serialize};

use crate::model::entity::{QuestionKind, QuizEntity};
use crate::model::ids::MovieId;

/// A film and the composer who scored it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    id: MovieId,
    title: String,
    year: i32,
    composer: String,
}

impl Movie {
    #[must_use]
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        year: i32,
        composer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            composer: composer.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn composer(&self) -> &str {
        &self.composer
    }
}

impl QuizEntity for Movie {
    type Id = MovieId;

    fn id(&self) -> MovieId {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn numeric_attribute(&self) -> i32 {
        self.year
    }

    fn categorical_attribute(&self) -> &str {
        &self.composer
    }

    fn question_text(&self, kind: QuestionKind) -> String {
        match kind {
            QuestionKind::Numeric => format!("What year was \"{}\" released?", self.title),
            QuestionKind::Categorical => {
                format!("Who composed the music for \"{}\"?", self.title)
            }
        }
    }

    fn incorrect_feedback(&self, kind: QuestionKind) -> String {
        match kind {
            QuestionKind::Numeric => format!("Incorrect. The correct year is {}.", self.year),
            QuestionKind::Categorical => {
                format!("Incorrect. The correct composer is {}.", self.composer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_question_texts_quote_the_title() {
        let movie = Movie::new(MovieId::new(6), "Psycho", 1960, "Bernard Herrmann");
        assert_eq!(
            movie.question_text(QuestionKind::Numeric),
            "What year was \"Psycho\" released?"
        );
        assert_eq!(
            movie.question_text(QuestionKind::Categorical),
            "Who composed the music for \"Psycho\"?"
        );
        assert_eq!(
            movie.incorrect_feedback(QuestionKind::Numeric),
            "Incorrect. The correct year is 1960."
        );
    }
}
