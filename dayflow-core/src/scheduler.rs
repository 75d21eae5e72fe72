//! Day scheduler: greedy single pass, no backtracking.
//!
//! Order tasks by energy priority (high first), then by duration (longer
//! first). A watermark `current` only ever moves forward. For each task:
//! - ask the slot finder for the best slot at or after `current`;
//! - else force-place at `current` if it still ends inside the window;
//! - else the task is unplaced.
//!
//! The result is sorted by start time.

use log::{debug, warn};

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::slot::best_slot;
use crate::task::{ScheduledTask, Task};
use crate::time::minutes_to_time;

/// Full result of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Sorted by start time.
    pub scheduled: Vec<ScheduledTask>,
    /// Tasks that did not fit, in the order they were considered.
    pub unplaced: Vec<Task>,
}

impl ScheduleOutcome {
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Schedule a day. Tasks that cannot be placed are dropped silently; use
/// [`build_schedule`] to see them.
pub fn schedule_tasks(tasks: &[Task], config: &SchedulerConfig) -> Result<Vec<ScheduledTask>> {
    Ok(build_schedule(tasks, config)?.scheduled)
}

/// Schedule a day and report which tasks were left out.
pub fn build_schedule(tasks: &[Task], config: &SchedulerConfig) -> Result<ScheduleOutcome> {
    if tasks.is_empty() {
        return Ok(ScheduleOutcome::default());
    }

    config.validate()?;
    if let Some(bad) = tasks.iter().find(|t| t.duration <= 0) {
        return Err(SchedulerError::InvalidDuration {
            task_id: bad.id.clone(),
            duration: bad.duration,
        });
    }

    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| {
        b.energy_level
            .priority()
            .cmp(&a.energy_level.priority())
            .then_with(|| b.duration.cmp(&a.duration))
    });

    let window_end = config.window_end_minutes();
    let mut current = config.window_start_minutes();

    // (start, end, task) in placement order
    let mut placed: Vec<(i32, i32, &Task)> = Vec::with_capacity(tasks.len());
    let mut busy: Vec<(i32, i32)> = Vec::with_capacity(tasks.len());
    let mut unplaced = Vec::new();

    for task in ordered {
        if let Some(slot) = best_slot(task, current, window_end, &busy) {
            debug!(
                "placed '{}' ({}, {}m) at {}-{} score={}",
                task.id,
                task.energy_level,
                task.duration,
                slot.start_time(),
                slot.end_time(),
                slot.score
            );
            placed.push((slot.start_minutes, slot.end_minutes, task));
            busy.push((slot.start_minutes, slot.end_minutes));
            current = current.max(slot.end_minutes.saturating_add(config.break_duration));
            continue;
        }

        match current.checked_add(task.duration) {
            Some(forced_end) if forced_end <= window_end => {
                debug!(
                    "no scored slot for '{}', forcing {}-{}",
                    task.id,
                    minutes_to_time(current),
                    minutes_to_time(forced_end)
                );
                placed.push((current, forced_end, task));
                busy.push((current, forced_end));
                current = forced_end.saturating_add(config.break_duration);
            }
            _ => {
                warn!(
                    "dropping '{}' ({}m): does not fit before window end {}",
                    task.id,
                    task.duration,
                    minutes_to_time(window_end)
                );
                unplaced.push(task.clone());
            }
        }
    }

    placed.sort_by_key(|&(start, _, _)| start);

    let scheduled = placed
        .into_iter()
        .map(|(start, end, task)| {
            ScheduledTask::new(task.clone(), minutes_to_time(start), minutes_to_time(end))
        })
        .collect();

    Ok(ScheduleOutcome {
        scheduled,
        unplaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyLevel;

    fn task(id: &str, duration: i32, energy: EnergyLevel) -> Task {
        Task::new(id, id, duration, energy)
    }

    fn ids(scheduled: &[ScheduledTask]) -> Vec<&str> {
        scheduled.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_single_high_task_starts_at_window_open() {
        let out = schedule_tasks(&[task("a", 60, EnergyLevel::High)], &SchedulerConfig::default())
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].scheduled_start_time, "08:00");
        assert_eq!(out[0].scheduled_end_time, "09:00");
        assert_eq!(out[0].time_block, "08:00-09:00");
    }

    #[test]
    fn test_high_before_low_with_break() {
        let tasks = vec![task("b", 30, EnergyLevel::Low), task("a", 30, EnergyLevel::High)];
        let out = schedule_tasks(&tasks, &SchedulerConfig::default()).unwrap();

        assert_eq!(ids(&out), vec!["a", "b"]);
        assert_eq!(out[0].time_block, "08:00-08:30");
        // candidates run 08:45, 09:15, ...; low tasks first score 10 at 15:15
        assert_eq!(out[1].time_block, "15:15-15:45");
    }

    #[test]
    fn test_longer_tasks_considered_first_within_tier() {
        let tasks = vec![
            task("short", 30, EnergyLevel::High),
            task("long", 90, EnergyLevel::High),
        ];
        let out = schedule_tasks(&tasks, &SchedulerConfig::default()).unwrap();
        assert_eq!(out[0].id(), "long");
        assert_eq!(out[0].time_block, "08:00-09:30");
        // watermark 09:45, still a high hour
        assert_eq!(out[1].time_block, "09:45-10:15");
    }

    #[test]
    fn test_oversized_task_is_unplaced() {
        let tasks = vec![task("huge", 13 * 60, EnergyLevel::Medium)];
        let outcome = build_schedule(&tasks, &SchedulerConfig::default()).unwrap();
        assert!(outcome.scheduled.is_empty());
        assert_eq!(outcome.unplaced.len(), 1);
        assert!(!outcome.is_complete());

        assert!(schedule_tasks(&tasks, &SchedulerConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_exact_fit_uses_forced_placement() {
        // min_start == max_start, so the finder declines and the fallback fits exactly
        let tasks = vec![task("full", 12 * 60, EnergyLevel::Low)];
        let out = schedule_tasks(&tasks, &SchedulerConfig::default()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].time_block, "08:00-20:00");
    }

    #[test]
    fn test_task_dropped_once_watermark_passes_window() {
        // window 08:00-12:00. "m" goes to 10:00 (medium hour), watermark 11:15.
        // "l" (60m) can't fit after 11:15 in the finder (max start 11:00), and
        // forced placement at 11:15 would end 12:15: dropped.
        let cfg = SchedulerConfig::new(8, 12, 15);
        let tasks = vec![task("m", 60, EnergyLevel::Medium), task("l", 60, EnergyLevel::Low)];
        let outcome = build_schedule(&tasks, &cfg).unwrap();
        assert_eq!(ids(&outcome.scheduled), vec!["m"]);
        assert_eq!(outcome.scheduled[0].time_block, "10:00-11:00");
        assert_eq!(outcome.unplaced[0].id, "l");
    }

    #[test]
    fn test_max_duration_is_unplaced_not_overflowed() {
        let tasks = vec![
            task("big", i32::MAX, EnergyLevel::Low),
            task("ok", 30, EnergyLevel::Low),
        ];
        let outcome = build_schedule(&tasks, &SchedulerConfig::default()).unwrap();
        assert_eq!(ids(&outcome.scheduled), vec!["ok"]);
        assert_eq!(outcome.unplaced.len(), 1);
        assert_eq!(outcome.unplaced[0].id, "big");
    }

    #[test]
    fn test_huge_break_stops_further_placement() {
        let cfg = SchedulerConfig::new(8, 20, i32::MAX);
        let tasks = vec![task("a", 60, EnergyLevel::High), task("b", 60, EnergyLevel::High)];
        let outcome = build_schedule(&tasks, &cfg).unwrap();
        assert_eq!(ids(&outcome.scheduled), vec!["a"]);
        assert_eq!(outcome.unplaced[0].id, "b");
    }

    #[test]
    fn test_negative_break_rejected() {
        let cfg = SchedulerConfig::new(8, 10, -60);
        let tasks = vec![task("a", 120, EnergyLevel::High), task("b", 60, EnergyLevel::High)];
        assert_eq!(
            schedule_tasks(&tasks, &cfg).unwrap_err(),
            SchedulerError::InvalidBreak(-60)
        );
    }

    #[test]
    fn test_empty_input_skips_window_validation() {
        let cfg = SchedulerConfig::new(20, 8, 15);
        assert!(schedule_tasks(&[], &cfg).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_window_with_tasks() {
        let cfg = SchedulerConfig::new(20, 8, 15);
        let err = schedule_tasks(&[task("a", 30, EnergyLevel::Low)], &cfg).unwrap_err();
        assert_eq!(err, SchedulerError::InvalidWindow { start_hour: 20, end_hour: 8 });
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let err = schedule_tasks(&[task("zero", 0, EnergyLevel::Low)], &SchedulerConfig::default())
            .unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidDuration { duration: 0, .. }));
    }
}
