//! Slot finder: best start time for one task given what's already placed.
//!
//! Candidates start at the lower bound and step every 30 minutes up to the
//! last start that still ends inside the window. Candidates that overlap a
//! placed task are skipped. The highest score wins and ties keep the earliest
//! candidate, so output is deterministic.

use crate::energy::{compatibility_score, EnergyLevel};
use crate::error::Result;
use crate::task::{ScheduledTask, Task};
use crate::time::{minutes_to_time, ranges_overlap, time_to_minutes};

pub const SLOT_GRANULARITY_MINUTES: i32 = 30;

/// High-energy tasks get this bonus before noon.
const EARLY_BONUS: u8 = 2;
const EARLY_BONUS_BEFORE_HOUR: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub score: u8,
}

impl Slot {
    pub fn start_time(&self) -> String {
        minutes_to_time(self.start_minutes)
    }

    pub fn end_time(&self) -> String {
        minutes_to_time(self.end_minutes)
    }
}

/// Score of starting a task of `energy` at minute `start`.
pub fn slot_score(energy: EnergyLevel, start_minutes: i32) -> u8 {
    let hour = start_minutes.div_euclid(60);
    let early_bonus = if energy == EnergyLevel::High && hour < EARLY_BONUS_BEFORE_HOUR {
        EARLY_BONUS
    } else {
        0
    };
    compatibility_score(energy, hour) + early_bonus
}

/// Best slot for `task` at or after `min_start_time`, avoiding `scheduled`.
///
/// Returns `Ok(None)` when the task cannot start before the window closes or
/// every candidate collides.
pub fn find_best_slot(
    task: &Task,
    min_start_time: &str,
    window_end_minutes: i32,
    scheduled: &[ScheduledTask],
) -> Result<Option<Slot>> {
    let busy = scheduled
        .iter()
        .map(|s| {
            Ok((
                time_to_minutes(&s.scheduled_start_time)?,
                time_to_minutes(&s.scheduled_end_time)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(best_slot(
        task,
        time_to_minutes(min_start_time)?,
        window_end_minutes,
        &busy,
    ))
}

/// Minute-level search over `busy` half-open `(start, end)` intervals.
pub(crate) fn best_slot(
    task: &Task,
    min_start_minutes: i32,
    window_end_minutes: i32,
    busy: &[(i32, i32)],
) -> Option<Slot> {
    let max_start_minutes = window_end_minutes.checked_sub(task.duration)?;
    if min_start_minutes >= max_start_minutes {
        return None;
    }

    let mut best: Option<Slot> = None;

    let mut start = min_start_minutes;
    while start <= max_start_minutes {
        // start <= window_end - duration, so this cannot overflow
        let end = start + task.duration;

        let collides = busy
            .iter()
            .any(|&(busy_start, busy_end)| ranges_overlap(start, end, busy_start, busy_end));

        if !collides {
            let score = slot_score(task.energy_level, start);
            // strict improvement only: first candidate wins ties
            if best.is_none_or(|b| score > b.score) {
                best = Some(Slot {
                    start_minutes: start,
                    end_minutes: end,
                    score,
                });
            }
        }

        match start.checked_add(SLOT_GRANULARITY_MINUTES) {
            Some(next) => start = next,
            None => break,
        }
    }

    best
}
