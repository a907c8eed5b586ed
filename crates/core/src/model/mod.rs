mod answer;
mod composer;
mod entity;
mod ids;
mod movie;
mod score;

pub use ids::{ComposerId, MovieId};

pub use answer::AnswerRecord;
pub use composer::Composer;
pub use entity::{QuestionKind, QuizEntity};
pub use movie::Movie;
pub use score::Score;
