//! Error types for dayflow-core.
//!
//! "Can't fit" is not an error: the scheduler reports unplaced tasks
//! structurally (see `ScheduleOutcome`). Errors here are reserved for input
//! that would otherwise corrupt downstream values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A wall-clock string did not match `HH:MM`.
    #[error("invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// The working window is empty, negative or outside 0..=24.
    #[error("invalid working window: {start_hour}..{end_hour} (hours 0-24, start before end)")]
    InvalidWindow { start_hour: i32, end_hour: i32 },

    /// Breaks between tasks can't be negative.
    #[error("invalid break duration: {0} minutes (must not be negative)")]
    InvalidBreak(i32),

    /// Minute arithmetic left the representable range.
    #[error("time out of range: {time} {delta:+} minutes")]
    TimeOutOfRange { time: String, delta: i32 },

    /// Task durations must be positive minutes.
    #[error("invalid duration for task '{task_id}': {duration} minutes")]
    InvalidDuration { task_id: String, duration: i32 },

    /// Day ratings are 1..=5.
    #[error("invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
