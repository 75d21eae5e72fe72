//! Time utilities: `HH:MM` wall-clock strings and minutes-since-midnight.
//!
//! Hours past 23 are accepted on purpose. The scheduler compares times
//! near the end of the window by minutes, and `minutes_to_time(1500)` must
//! round-trip to `"25:00"` rather than wrap.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SchedulerError};

static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,3}):([0-5]\d)$").expect("static HH:MM regex"));

/// Parse `HH:MM` into minutes since midnight.
pub fn time_to_minutes(time: &str) -> Result<i32> {
    let caps = HHMM_RE
        .captures(time.trim())
        .ok_or_else(|| SchedulerError::InvalidTimeFormat(time.to_string()))?;

    let hours: i32 = caps[1]
        .parse()
        .map_err(|_| SchedulerError::InvalidTimeFormat(time.to_string()))?;
    let minutes: i32 = caps[2]
        .parse()
        .map_err(|_| SchedulerError::InvalidTimeFormat(time.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`. No wraparound.
pub fn minutes_to_time(minutes: i32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours:02}:{mins:02}")
}

pub fn add_minutes(time: &str, delta: i32) -> Result<String> {
    let total = time_to_minutes(time)?
        .checked_add(delta)
        .ok_or_else(|| SchedulerError::TimeOutOfRange {
            time: time.to_string(),
            delta,
        })?;
    Ok(minutes_to_time(total))
}

/// Half-open overlap on minute values: touching endpoints do not overlap.
pub fn ranges_overlap(start1: i32, end1: i32, start2: i32, end2: i32) -> bool {
    start1 < end2 && start2 < end1
}

/// Half-open overlap of two `HH:MM` ranges.
pub fn time_ranges_overlap(start1: &str, end1: &str, start2: &str, end2: &str) -> Result<bool> {
    Ok(ranges_overlap(
        time_to_minutes(start1)?,
        time_to_minutes(end1)?,
        time_to_minutes(start2)?,
        time_to_minutes(end2)?,
    ))
}

/// Display form of a range, e.g. `"09:00 - 10:30"`.
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// Block start times covering `[start_hour, end_hour)` every `block_minutes`.
pub fn generate_time_blocks(start_hour: i32, end_hour: i32, block_minutes: i32) -> Vec<String> {
    if block_minutes <= 0 {
        return Vec::new();
    }

    let (Some(start), Some(end)) = (start_hour.checked_mul(60), end_hour.checked_mul(60)) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    let mut minutes = start;
    while minutes < end {
        blocks.push(minutes_to_time(minutes));
        let Some(next) = minutes.checked_add(block_minutes) else {
            break;
        };
        minutes = next;
    }
    blocks
}
