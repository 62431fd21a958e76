/// Habit record entity and name validation
///
/// This module defines the HabitRecord struct that holds the completion
/// history for a single named habit, along with the validation rules for
/// habit names.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::DomainError;

/// The completion history for one habit
///
/// Dates are kept in insertion order, mirroring the on-disk document shape
/// (`{ "dates": ["YYYY-MM-DD", ...] }`). The same date can never appear
/// twice for a habit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    /// Calendar dates on which the habit was marked done
    pub dates: Vec<NaiveDate>,
}

impl HabitRecord {
    /// Create an empty record for a newly added habit
    pub fn new() -> Self {
        Self { dates: Vec::new() }
    }

    /// Record a completion date
    ///
    /// Returns true if the date was appended, false if it was already
    /// present (marking the same day twice is a no-op, not an error).
    pub fn mark(&mut self, date: NaiveDate) -> bool {
        if self.dates.contains(&date) {
            return false;
        }
        self.dates.push(date);
        true
    }

    /// Check whether a date has been recorded for this habit
    pub fn is_marked(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Total number of recorded completions
    pub fn completion_count(&self) -> usize {
        self.dates.len()
    }
}

/// Validate a habit name according to business rules
///
/// Names are case-sensitive and must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be empty".to_string()
        ));
    }

    if trimmed.len() > 100 {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be longer than 100 characters".to_string()
        ));
    }

    Ok(())
}
