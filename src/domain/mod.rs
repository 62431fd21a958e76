/// Domain module containing core business logic and data types
///
/// This module defines the core entities (HabitRecord, Streak, Badge) and
/// their validation rules. These types represent the fundamental concepts
/// in the habit tracking system.

pub mod habit;
pub mod streak;
pub mod badge;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use badge::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
}
