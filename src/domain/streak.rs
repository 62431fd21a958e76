/// Streak calculation functionality
///
/// This module defines the Streak struct that holds calculated streak
/// information for a habit, derived from its completion dates.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Calculated streak information for a habit
///
/// A streak is a maximal run of consecutive calendar days with a
/// completion. The current streak only counts if the run reaches "today";
/// a habit not yet marked today reports a current streak of zero even if
/// the record has historical runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Consecutive days completed, ending today (0 if today is unmarked)
    pub current: u32,
    /// Best run ever achieved for this habit
    pub longest: u32,
}

impl Streak {
    /// An empty streak record for a habit with no completions
    pub fn zero() -> Self {
        Self { current: 0, longest: 0 }
    }

    /// Calculate streak information from a habit's completion dates
    ///
    /// `today` is the caller's local calendar day; it is injected rather
    /// than read from the wall clock so results are reproducible in tests.
    /// Input dates may be unsorted and are deduplicated before run
    /// detection, so a duplicate entry can never inflate a run length.
    pub fn calculate(dates: &[NaiveDate], today: NaiveDate) -> Self {
        let mut sorted = dates.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        if sorted.is_empty() {
            return Self::zero();
        }

        // Walk the sorted dates, partitioning into maximal runs of
        // consecutive calendar days. A gap of exactly 1 day continues a
        // run; any other gap starts a new one.
        let mut longest = 1u32;
        let mut run = 1u32;
        let mut last = sorted[0];

        for &date in sorted.iter().skip(1) {
            if (date - last).num_days() == 1 {
                run += 1;
            } else {
                longest = longest.max(run);
                run = 1;
            }
            last = date;
        }
        longest = longest.max(run);

        // The final run only counts as the current streak if it reaches
        // today; a missed day breaks it down to zero.
        let current = if last == today { run } else { 0 };

        Self { current, longest }
    }
}
