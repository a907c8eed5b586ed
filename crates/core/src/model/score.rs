use serde::{Deserialize, Serialize};
use std::fmt;

/// Running tally for a quiz session.
///
/// `correct` never exceeds `attempted`; the only way to move either counter is
/// [`Score::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    attempted: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt.
    pub fn record(&mut self, correct: bool) {
        self.attempted = self.attempted.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    /// Percentage of correct answers, rounded half-up. `0` before any attempt.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.attempted == 0 {
            return 0;
        }
        let correct = u64::from(self.correct);
        let attempted = u64::from(self.attempted);
        let rounded = (correct * 200 + attempted) / (attempted * 2);
        u32::try_from(rounded).unwrap_or(100)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}/{} ({}%)",
            self.correct,
            self.attempted,
            self.percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_score_is_zero_percent() {
        let score = Score::new();
        assert_eq!(score.percent(), 0);
        assert_eq!(score.to_string(), "Score: 0/0 (0%)");
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let mut score = Score::new();
        score.record(true);
        score.record(false);
        score.record(true);

        assert_eq!(score.correct(), 2);
        assert_eq!(score.attempted(), 3);
        assert_eq!(score.percent(), 67);
        assert_eq!(score.to_string(), "Score: 2/3 (67%)");
    }

    #[test]
    fn halves_round_up() {
        let mut score = Score::new();
        score.record(true);
        score.record(false);
        assert_eq!(score.percent(), 50);

        // 1/8 = 12.5%
        let mut score = Score::new();
        score.record(true);
        for _ in 0..7 {
            score.record(false);
        }
        assert_eq!(score.percent(), 13);
    }
}
