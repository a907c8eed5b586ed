use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("numeric window must be > 0")]
    ZeroWindow,

    #[error("numeric bounds are inverted: {min} > {max}")]
    InvertedBounds { min: i32, max: i32 },

    #[error("sampling attempts must be > 0")]
    ZeroSamplingAttempts,
}

//
// ─── NUMERIC RANGE ─────────────────────────────────────────────────────────────
//

/// Sampling window and sanity bound for year-valued distractors.
///
/// Distractors are drawn from `correct - window ..= correct + window`, clipped
/// to `min ..= max` (both inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    window: u32,
    min: i32,
    max: i32,
}

impl NumericRange {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroWindow` if `window` is zero.
    /// Returns `SettingsError::InvertedBounds` if `min > max`.
    pub fn new(window: u32, min: i32, max: i32) -> Result<Self, SettingsError> {
        if window == 0 {
            return Err(SettingsError::ZeroWindow);
        }
        if min > max {
            return Err(SettingsError::InvertedBounds { min, max });
        }
        Ok(Self { window, min, max })
    }

    /// Composer birth years: ±20 years, strictly between 1600 and 2000.
    #[must_use]
    pub fn birth_years() -> Self {
        Self {
            window: 20,
            min: 1601,
            max: 1999,
        }
    }

    /// Movie release years: ±5 years, after 1900 and not in the future.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvertedBounds` if `current_year` is 1900 or earlier.
    pub fn release_years(current_year: i32) -> Result<Self, SettingsError> {
        Self::new(5, 1901, current_year)
    }

    #[must_use]
    pub fn window(&self) -> u32 {
        self.window
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of valid distractors for `correct` inside `window`.
    #[must_use]
    pub fn candidates_within(&self, correct: i32, window: u32) -> usize {
        let correct = i64::from(correct);
        let lo = (correct - i64::from(window)).max(i64::from(self.min));
        let hi = (correct + i64::from(window)).min(i64::from(self.max));
        if lo > hi {
            return 0;
        }
        let span = usize::try_from(hi - lo + 1).unwrap_or(usize::MAX);
        if (lo..=hi).contains(&correct) {
            span - 1
        } else {
            span
        }
    }
}

//
// ─── QUIZ SETTINGS ─────────────────────────────────────────────────────────────
//

/// Default cap on random draws before the generator falls back to enumeration.
pub const DEFAULT_SAMPLING_ATTEMPTS: u32 = 64;

/// Per-quiz generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    numeric: NumericRange,
    sampling_attempts: u32,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroSamplingAttempts` if `sampling_attempts` is zero.
    pub fn new(numeric: NumericRange, sampling_attempts: u32) -> Result<Self, SettingsError> {
        if sampling_attempts == 0 {
            return Err(SettingsError::ZeroSamplingAttempts);
        }
        Ok(Self {
            numeric,
            sampling_attempts,
        })
    }

    /// Settings for the composer quiz.
    #[must_use]
    pub fn composer() -> Self {
        Self {
            numeric: NumericRange::birth_years(),
            sampling_attempts: DEFAULT_SAMPLING_ATTEMPTS,
        }
    }

    /// Settings for the movie quiz, bounded by the clock's current year.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvertedBounds` if the clock reports a year before 1901.
    pub fn movie(clock: &Clock) -> Result<Self, SettingsError> {
        Ok(Self {
            numeric: NumericRange::release_years(clock.current_year())?,
            sampling_attempts: DEFAULT_SAMPLING_ATTEMPTS,
        })
    }

    #[must_use]
    pub fn numeric(&self) -> &NumericRange {
        &self.numeric
    }

    #[must_use]
    pub fn sampling_attempts(&self) -> u32 {
        self.sampling_attempts
    }
}
