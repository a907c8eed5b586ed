use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

use crate::model::{QuestionKind, QuizEntity};
use crate::options::{self, DISTRACTOR_COUNT, OPTION_COUNT, OptionError, OptionSet};
use crate::settings::QuizSettings;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset has no entities")]
    Empty,

    #[error("duplicate entity id: {id}")]
    DuplicateId { id: String },

    #[error("categorical pool has {distinct} distinct values, needs at least {required}")]
    CategoricalPoolTooSmall { distinct: usize, required: usize },

    #[error("entity {id}: value {value} is outside {min}..={max}")]
    ValueOutOfBounds {
        id: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("entity {id}: only {available} distractors fit around {value}, needs {required}")]
    NumericWindowTooNarrow {
        id: String,
        value: i32,
        available: usize,
        required: usize,
    },
}

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// Immutable, validated list of quiz entities plus the generator settings they
/// were validated against.
///
/// Construction checks that every question the dataset can pose has enough
/// distractors, so option generation never has to widen its window or come up
/// short at runtime.
#[derive(Debug, Clone)]
pub struct Dataset<E: QuizEntity> {
    entities: Vec<E>,
    categorical_pool: Vec<String>,
    settings: QuizSettings,
}

impl<E: QuizEntity> Dataset<E> {
    /// Validate and load a dataset.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if `entities` is empty.
    /// Returns `DatasetError::DuplicateId` if two entities share an id.
    /// Returns `DatasetError::CategoricalPoolTooSmall` if fewer than four distinct
    /// categorical values exist.
    /// Returns `DatasetError::ValueOutOfBounds` if a numeric value lies outside
    /// the sanity bound.
    /// Returns `DatasetError::NumericWindowTooNarrow` if the window around a
    /// numeric value holds fewer than three valid distractors.
    pub fn new(entities: Vec<E>, settings: QuizSettings) -> Result<Self, DatasetError> {
        if entities.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut ids = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !ids.insert(entity.id()) {
                return Err(DatasetError::DuplicateId {
                    id: entity.id().to_string(),
                });
            }
        }

        let range = settings.numeric();
        for entity in &entities {
            let value = entity.numeric_attribute();
            if !range.contains(value) {
                return Err(DatasetError::ValueOutOfBounds {
                    id: entity.id().to_string(),
                    value,
                    min: range.min(),
                    max: range.max(),
                });
            }
            let available = range.candidates_within(value, range.window());
            if available < DISTRACTOR_COUNT {
                return Err(DatasetError::NumericWindowTooNarrow {
                    id: entity.id().to_string(),
                    value,
                    available,
                    required: DISTRACTOR_COUNT,
                });
            }
        }

        let mut seen = HashSet::new();
        let categorical_pool: Vec<String> = entities
            .iter()
            .map(E::categorical_attribute)
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect();
        if categorical_pool.len() < OPTION_COUNT {
            return Err(DatasetError::CategoricalPoolTooSmall {
                distinct: categorical_pool.len(),
                required: OPTION_COUNT,
            });
        }

        Ok(Self {
            entities,
            categorical_pool,
            settings,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always false for a validated dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entities.get(index)
    }

    /// Index of the entity with the given id.
    #[must_use]
    pub fn position(&self, id: E::Id) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id() == id)
    }

    /// Distinct categorical values, in first-seen order.
    #[must_use]
    pub fn categorical_pool(&self) -> &[String] {
        &self.categorical_pool
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Generate the option set for asking `kind` about `entity`.
    ///
    /// # Errors
    ///
    /// Returns `OptionError` if the generator cannot build a full option set.
    /// This does not happen for entities that were part of this dataset at load.
    pub fn options_for<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        entity: &E,
        kind: QuestionKind,
    ) -> Result<OptionSet, OptionError> {
        match kind {
            QuestionKind::Numeric => {
                options::numeric_options(rng, entity.numeric_attribute(), &self.settings)
            }
            QuestionKind::Categorical => options::categorical_options(
                rng,
                entity.categorical_attribute(),
                &self.categorical_pool,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Composer, ComposerId};
    use crate::settings::NumericRange;

    fn composer(id: u64, year: i32, place: &str) -> Composer {
        Composer::new(ComposerId::new(id), format!("Composer {id}"), year, place)
    }

    fn four_places() -> Vec<Composer> {
        vec![
            composer(1, 1911, "A"),
            composer(2, 1928, "B"),
            composer(3, 1933, "C"),
            composer(4, 1929, "D"),
        ]
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = Dataset::<Composer>::new(Vec::new(), QuizSettings::composer()).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut entities = four_places();
        entities.push(composer(2, 1950, "E"));
        let err = Dataset::new(entities, QuizSettings::composer()).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateId { id: "2".into() });
    }

    #[test]
    fn rejects_small_categorical_pool() {
        let entities = vec![
            composer(1, 1911, "A"),
            composer(2, 1928, "B"),
            composer(3, 1933, "C"),
            composer(4, 1929, "A"),
        ];
        let err = Dataset::new(entities, QuizSettings::composer()).unwrap_err();
        assert_eq!(
            err,
            DatasetError::CategoricalPoolTooSmall {
                distinct: 3,
                required: 4
            }
        );
    }

    #[test]
    fn rejects_value_outside_bound() {
        let mut entities = four_places();
        entities.push(composer(5, 2001, "E"));
        let err = Dataset::new(entities, QuizSettings::composer()).unwrap_err();
        assert!(matches!(err, DatasetError::ValueOutOfBounds { value: 2001, .. }));
    }

    #[test]
    fn rejects_window_too_narrow_for_value() {
        let range = NumericRange::new(1, 1900, 2000).unwrap();
        let settings = QuizSettings::new(range, 64).unwrap();
        let err = Dataset::new(four_places(), settings).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NumericWindowTooNarrow {
                available: 2,
                required: 3,
                ..
            }
        ));
    }

    #[test]
    fn pool_keeps_first_seen_order() {
        let mut entities = four_places();
        entities.push(composer(5, 1950, "B"));
        let dataset = Dataset::new(entities, QuizSettings::composer()).unwrap();
        assert_eq!(dataset.categorical_pool(), ["A", "B", "C", "D"]);
        assert_eq!(dataset.position(ComposerId::new(5)), Some(4));
        assert_eq!(dataset.position(ComposerId::new(99)), None);
    }
}
