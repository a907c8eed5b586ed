//! Multiple-choice option generation.
//!
//! Both generators are pure functions of the correct value, the candidate
//! source, and the supplied random number generator.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::settings::{NumericRange, QuizSettings};

/// Number of choices shown for every question.
pub const OPTION_COUNT: usize = 4;

/// Number of wrong choices shown for every question.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionError {
    #[error("requires {required} distractors but only {available} candidates exist")]
    InsufficientCandidates { required: usize, available: usize },

    #[error("option set must have {expected} entries, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("duplicate option: {0}")]
    Duplicate(String),

    #[error("correct answer is not among the options: {0}")]
    MissingCorrect(String),
}

//
// ─── OPTION SET ────────────────────────────────────────────────────────────────
//

/// Ordered candidate answers for one question.
///
/// Always holds exactly [`OPTION_COUNT`] distinct strings, one of which is the
/// correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    options: Vec<String>,
    correct_index: usize,
}

impl OptionSet {
    /// Validate an ordered list of options against the correct answer.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::WrongLength` unless there are exactly four options.
    /// Returns `OptionError::Duplicate` if any option repeats.
    /// Returns `OptionError::MissingCorrect` if `correct` is not present.
    pub fn try_new(options: Vec<String>, correct: &str) -> Result<Self, OptionError> {
        if options.len() != OPTION_COUNT {
            return Err(OptionError::WrongLength {
                expected: OPTION_COUNT,
                actual: options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(OPTION_COUNT);
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(OptionError::Duplicate(option.clone()));
            }
        }

        let correct_index = options
            .iter()
            .position(|option| option == correct)
            .ok_or_else(|| OptionError::MissingCorrect(correct.to_string()))?;

        Ok(Self {
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The wrong choices, in display order.
    pub fn distractors(&self) -> impl Iterator<Item = &str> {
        let correct_index = self.correct_index;
        self.options
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != correct_index)
            .map(|(_, option)| option.as_str())
    }
}

//
// ─── NUMERIC ───────────────────────────────────────────────────────────────────
//

/// Build options for a year-valued question.
///
/// Offsets are sampled uniformly from `±window` at most
/// `settings.sampling_attempts()` times. If that does not yield three
/// distractors, every remaining candidate in the window is enumerated instead,
/// and the window is doubled only when it cannot supply enough on its own.
///
/// # Errors
///
/// Returns `OptionError::InsufficientCandidates` if the whole sanity bound holds
/// fewer than three values other than `correct`.
pub fn numeric_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: i32,
    settings: &QuizSettings,
) -> Result<OptionSet, OptionError> {
    let range = settings.numeric();
    let window = i64::from(range.window());
    let mut chosen: Vec<i32> = Vec::with_capacity(DISTRACTOR_COUNT);

    for _ in 0..settings.sampling_attempts() {
        if chosen.len() == DISTRACTOR_COUNT {
            break;
        }
        let offset = rng.random_range(-window..=window);
        let Ok(candidate) = i32::try_from(i64::from(correct) + offset) else {
            continue;
        };
        if candidate != correct && range.contains(candidate) && !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }

    if chosen.len() < DISTRACTOR_COUNT {
        debug!(
            correct,
            found = chosen.len(),
            "sampling budget exhausted, enumerating window"
        );
        fill_by_enumeration(rng, correct, range, &mut chosen)?;
    }

    let correct = correct.to_string();
    let mut options: Vec<String> = chosen.iter().map(ToString::to_string).collect();
    options.push(correct.clone());
    options.shuffle(rng);
    OptionSet::try_new(options, &correct)
}

fn fill_by_enumeration<R: Rng + ?Sized>(
    rng: &mut R,
    correct: i32,
    range: &NumericRange,
    chosen: &mut Vec<i32>,
) -> Result<(), OptionError> {
    let min = i64::from(range.min());
    let max = i64::from(range.max());
    let mut window = range.window();

    loop {
        let lo = (i64::from(correct) - i64::from(window)).max(min);
        let hi = (i64::from(correct) + i64::from(window)).min(max);

        let mut pool: Vec<i32> = (lo..=hi)
            .filter_map(|value| i32::try_from(value).ok())
            .filter(|value| *value != correct && !chosen.contains(value))
            .collect();
        pool.shuffle(rng);

        let needed = DISTRACTOR_COUNT - chosen.len();
        chosen.extend(pool.into_iter().take(needed));
        if chosen.len() == DISTRACTOR_COUNT {
            return Ok(());
        }

        if lo <= min && hi >= max {
            return Err(OptionError::InsufficientCandidates {
                required: DISTRACTOR_COUNT,
                available: chosen.len(),
            });
        }

        window = window.saturating_mul(2);
        warn!(correct, window, "numeric window too narrow, widening");
    }
}

//
// ─── CATEGORICAL ───────────────────────────────────────────────────────────────
//

/// Build options for a label-valued question from the pool of known values.
///
/// Repeated pool entries are collapsed before drawing.
///
/// # Errors
///
/// Returns `OptionError::InsufficientCandidates` if the pool holds fewer than
/// three distinct values other than `correct`.
pub fn categorical_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: &str,
    pool: &[String],
) -> Result<OptionSet, OptionError> {
    let mut seen = HashSet::new();
    let mut others: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|value| *value != correct && seen.insert(*value))
        .collect();

    if others.len() < DISTRACTOR_COUNT {
        return Err(OptionError::InsufficientCandidates {
            required: DISTRACTOR_COUNT,
            available: others.len(),
        });
    }

    others.shuffle(rng);
    others.truncate(DISTRACTOR_COUNT);

    let mut options: Vec<String> = others.into_iter().map(str::to_string).collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    OptionSet::try_new(options, correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn places() -> Vec<String> {
        [
            "New York City, USA",
            "Rome, Italy",
            "York, England",
            "Los Angeles, USA",
            "Frankfurt, Germany",
        ]
        .into_iter()
        .map(str::to_string)
        .collect()
    }

    #[test]
    fn option_set_rejects_malformed_lists() {
        let short = vec!["1".to_string(), "2".to_string()];
        assert_eq!(
            OptionSet::try_new(short, "1").unwrap_err(),
            OptionError::WrongLength {
                expected: 4,
                actual: 2
            }
        );

        let dup = ["1", "2", "2", "3"].map(str::to_string).to_vec();
        assert_eq!(
            OptionSet::try_new(dup, "1").unwrap_err(),
            OptionError::Duplicate("2".into())
        );

        let missing = ["1", "2", "3", "4"].map(str::to_string).to_vec();
        assert_eq!(
            OptionSet::try_new(missing, "5").unwrap_err(),
            OptionError::MissingCorrect("5".into())
        );
    }

    #[test]
    fn numeric_options_hold_invariants() {
        let settings = QuizSettings::composer();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = numeric_options(&mut rng, 1911, &settings).unwrap();

            assert_eq!(set.len(), OPTION_COUNT);
            assert_eq!(set.correct(), "1911");
            assert_eq!(set.iter().filter(|o| *o == "1911").count(), 1);
            for distractor in set.distractors() {
                let year: i32 = distractor.parse().unwrap();
                assert_ne!(year, 1911);
                assert!((year - 1911).abs() <= 20, "{year} outside window");
                assert!(settings.numeric().contains(year));
            }
        }
    }

    #[test]
    fn numeric_options_near_bound_stay_in_bound() {
        let range = NumericRange::new(5, 1901, 2023).unwrap();
        let settings = QuizSettings::new(range, 64).unwrap();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = numeric_options(&mut rng, 2023, &settings).unwrap();
            for distractor in set.distractors() {
                let year: i32 = distractor.parse().unwrap();
                assert!((2018..=2022).contains(&year), "{year} out of range");
            }
        }
    }

    #[test]
    fn single_sampling_attempt_falls_back_to_enumeration() {
        let settings = QuizSettings::new(NumericRange::birth_years(), 1).unwrap();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = numeric_options(&mut rng, 1950, &settings).unwrap();
            assert_eq!(set.distractors().count(), 3);
            for distractor in set.distractors() {
                let year: i32 = distractor.parse().unwrap();
                assert!((1930..=1970).contains(&year));
            }
        }
    }

    #[test]
    fn narrow_window_widens_and_terminates() {
        // ±1 around 1950 yields only two candidates; widening must find a third.
        let range = NumericRange::new(1, 1900, 2000).unwrap();
        let settings = QuizSettings::new(range, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let set = numeric_options(&mut rng, 1950, &settings).unwrap();
        assert_eq!(set.len(), OPTION_COUNT);
        assert_eq!(set.correct(), "1950");
    }

    #[test]
    fn exhausted_bound_is_an_error() {
        let range = NumericRange::new(5, 2000, 2002).unwrap();
        let settings = QuizSettings::new(range, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = numeric_options(&mut rng, 2001, &settings).unwrap_err();
        assert_eq!(
            err,
            OptionError::InsufficientCandidates {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn categorical_options_draw_from_pool() {
        let pool = places();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = categorical_options(&mut rng, "Rome, Italy", &pool).unwrap();

            assert_eq!(set.len(), OPTION_COUNT);
            assert_eq!(set.correct(), "Rome, Italy");
            for distractor in set.distractors() {
                assert_ne!(distractor, "Rome, Italy");
                assert!(pool.iter().any(|p| p == distractor));
            }
        }
    }

    #[test]
    fn categorical_options_ignore_duplicate_pool_entries() {
        let pool = ["A", "B", "B", "C", "C", "D"].map(str::to_string).to_vec();
        let mut rng = StdRng::seed_from_u64(3);
        let set = categorical_options(&mut rng, "A", &pool).unwrap();
        let mut sorted: Vec<&str> = set.iter().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn categorical_pool_too_small_is_an_error() {
        let pool = ["A", "B", "C"].map(str::to_string).to_vec();
        let mut rng = StdRng::seed_from_u64(0);
        let err = categorical_options(&mut rng, "A", &pool).unwrap_err();
        assert_eq!(
            err,
            OptionError::InsufficientCandidates {
                required: 3,
                available: 2
            }
        );
    }

    #[test]
    fn correct_answer_position_is_spread() {
        let pool = places();
        let mut positions = [0_u32; OPTION_COUNT];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..4_000 {
            let set = categorical_options(&mut rng, "York, England", &pool).unwrap();
            positions[set.correct_index()] += 1;
        }
        for count in positions {
            assert!((800..=1200).contains(&count), "skewed positions: {positions:?}");
        }
    }
}
