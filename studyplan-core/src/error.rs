//! Error types for studyplan.

use thiserror::Error;

use crate::time_of_day::TimeOfDay;
use crate::weekday::Weekday;

/// Errors that can occur in studyplan operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("End time must be after start time ({start} - {end})")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    #[error(
        "Time conflict on {day}: {start} - {end} overlaps '{existing_subject}' ({existing_start} - {existing_end})"
    )]
    Conflict {
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
        existing_subject: String,
        existing_start: TimeOfDay,
        existing_end: TimeOfDay,
    },

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Invalid day '{0}'. Expected a weekday name like Monday")]
    InvalidDay(String),

    #[error("Invalid priority '{0}'. Expected low, medium or high")]
    InvalidPriority(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PlannerError {
    /// True for errors that reject user input before anything was written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidRange { .. } | PlannerError::Conflict { .. }
        )
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(e: serde_json::Error) -> Self {
        PlannerError::Serialization(e.to_string())
    }
}

/// Result type alias for studyplan operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
