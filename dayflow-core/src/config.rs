//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

pub const DEFAULT_START_HOUR: i32 = 8;
pub const DEFAULT_END_HOUR: i32 = 20;
pub const DEFAULT_BREAK_DURATION: i32 = 15;

/// `end_hour` may be 24 (midnight as the closing wall).
const MAX_HOUR: i32 = 24;

/// Working window and break policy for one scheduling run.
///
/// `end_hour` is the wall boundary: a task may end exactly at `end_hour:00`
/// but never start or run past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: i32,
    #[serde(default = "default_end_hour")]
    pub end_hour: i32,
    /// Minutes inserted after each task before the next may start.
    #[serde(default = "default_break_duration")]
    pub break_duration: i32,
}

fn default_start_hour() -> i32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> i32 {
    DEFAULT_END_HOUR
}

fn default_break_duration() -> i32 {
    DEFAULT_BREAK_DURATION
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            break_duration: DEFAULT_BREAK_DURATION,
        }
    }
}

impl SchedulerConfig {
    pub fn new(start_hour: i32, end_hour: i32, break_duration: i32) -> Self {
        Self {
            start_hour,
            end_hour,
            break_duration,
        }
    }

    pub fn window_start_minutes(&self) -> i32 {
        self.start_hour * 60
    }

    pub fn window_end_minutes(&self) -> i32 {
        self.end_hour * 60
    }

    /// Fail fast on a window that is empty, negative or outside one day, and
    /// on negative breaks.
    pub fn validate(&self) -> Result<()> {
        let in_day = |h: i32| (0..=MAX_HOUR).contains(&h);
        if !in_day(self.start_hour)
            || !in_day(self.end_hour)
            || self.window_end_minutes() - self.window_start_minutes() <= 0
        {
            return Err(SchedulerError::InvalidWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        if self.break_duration < 0 {
            return Err(SchedulerError::InvalidBreak(self.break_duration));
        }
        Ok(())
    }
}
