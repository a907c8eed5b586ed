//! Built-in quiz datasets.

mod composers;
mod movies;

pub use composers::composers;
pub use movies::movies;

use crate::dataset::Dataset;
use crate::error::Error;
use crate::model::{Composer, Movie};
use crate::settings::QuizSettings;
use crate::time::Clock;

/// Load and validate the composer dataset.
///
/// # Errors
///
/// Returns `Error::Dataset` if the built-in data fails validation.
pub fn composer_dataset() -> Result<Dataset<Composer>, Error> {
    Ok(Dataset::new(composers(), QuizSettings::composer())?)
}

/// Load and validate the movie dataset, bounding release years by `clock`.
///
/// # Errors
///
/// Returns `Error::Settings` if the clock year is not after 1900.
/// Returns `Error::Dataset` if the built-in data fails validation.
pub fn movie_dataset(clock: &Clock) -> Result<Dataset<Movie>, Error> {
    let settings = QuizSettings::movie(clock)?;
    Ok(Dataset::new(movies(), settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizEntity;
    use crate::time::fixed_clock;

    #[test]
    fn builtin_datasets_validate() {
        let composers = composer_dataset().unwrap();
        assert_eq!(composers.len(), 10);
        assert_eq!(composers.categorical_pool().len(), 7);

        let movies = movie_dataset(&fixed_clock()).unwrap();
        assert_eq!(movies.len(), 31);
        assert_eq!(movies.categorical_pool().len(), 10);
    }

    #[test]
    fn every_movie_composer_is_a_known_composer() {
        let names: Vec<String> = composers().iter().map(|c| c.label().to_string()).collect();
        for movie in movies() {
            assert!(
                names.iter().any(|name| name == movie.composer()),
                "unknown composer {}",
                movie.composer()
            );
        }
    }
}
