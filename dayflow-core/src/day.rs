//! Day-level views over a schedule: plan summary, stats and feedback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::energy::EnergyLevel;
use crate::error::{Result, SchedulerError};
use crate::task::{ScheduledTask, Task};
use crate::time::minutes_to_time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    pub tasks: Vec<ScheduledTask>,
    /// Sum of scheduled task durations, breaks excluded.
    pub total_duration: i32,
    pub start_time: String,
    pub end_time: String,
}

impl DayPlan {
    pub fn from_schedule(
        date: NaiveDate,
        tasks: Vec<ScheduledTask>,
        config: &SchedulerConfig,
    ) -> Self {
        let total_duration = tasks.iter().map(|t| t.task.duration).sum();
        Self {
            date,
            tasks,
            total_duration,
            start_time: minutes_to_time(config.window_start_minutes()),
            end_time: minutes_to_time(config.window_end_minutes()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// 0..=100
    pub completion_rate: f64,
    pub total_duration: i32,
    pub average_energy_level: EnergyLevel,
}

/// Completion and load summary for a day's tasks.
///
/// The dominant energy level is high or low only with a strict majority over
/// both other tiers, otherwise medium.
pub fn calculate_day_stats(tasks: &[Task]) -> DayStats {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total_tasks > 0 {
        completed_tasks as f64 / total_tasks as f64 * 100.0
    } else {
        0.0
    };
    let total_duration = tasks.iter().map(|t| t.duration).sum();

    let count = |level: EnergyLevel| tasks.iter().filter(|t| t.energy_level == level).count();
    let (high, medium, low) = (
        count(EnergyLevel::High),
        count(EnergyLevel::Medium),
        count(EnergyLevel::Low),
    );

    let average_energy_level = if high > medium && high > low {
        EnergyLevel::High
    } else if low > medium && low > high {
        EnergyLevel::Low
    } else {
        EnergyLevel::Medium
    };

    DayStats {
        total_tasks,
        completed_tasks,
        completion_rate,
        total_duration,
        average_energy_level,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayFeedback {
    pub date: NaiveDate,
    /// 1..=5
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed_tasks: Vec<String>,
}

impl DayFeedback {
    pub fn new(date: NaiveDate, rating: u8) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(SchedulerError::InvalidRating(rating));
        }
        Ok(Self {
            date,
            rating,
            notes: None,
            completed_tasks: Vec::new(),
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_completed(mut self, task_ids: Vec<String>) -> Self {
        self.completed_tasks = task_ids;
        self
    }
}

/// One feedback entry per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackLog {
    entries: Vec<DayFeedback>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entry for the same date, or append.
    pub fn save(&mut self, feedback: DayFeedback) {
        match self.entries.iter_mut().find(|f| f.date == feedback.date) {
            Some(existing) => *existing = feedback,
            None => self.entries.push(feedback),
        }
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<&DayFeedback> {
        self.entries.iter().find(|f| f.date == date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayFeedback> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule_tasks;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_stats_for_empty_day() {
        let stats = calculate_day_stats(&[]);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.average_energy_level, EnergyLevel::Medium);
    }

    #[test]
    fn test_stats_completion_and_dominant_energy() {
        let tasks = vec![
            Task::new("a", "a", 60, EnergyLevel::High).completed(),
            Task::new("b", "b", 30, EnergyLevel::High),
            Task::new("c", "c", 30, EnergyLevel::Low).completed(),
            Task::new("d", "d", 15, EnergyLevel::Medium),
        ];
        let stats = calculate_day_stats(&tasks);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(stats.completion_rate, 50.0);
        assert_eq!(stats.total_duration, 135);
        assert_eq!(stats.average_energy_level, EnergyLevel::High);
    }

    #[test]
    fn test_stats_tie_falls_back_to_medium() {
        let tasks = vec![
            Task::new("a", "a", 30, EnergyLevel::High),
            Task::new("b", "b", 30, EnergyLevel::Low),
        ];
        assert_eq!(calculate_day_stats(&tasks).average_energy_level, EnergyLevel::Medium);
    }

    #[test]
    fn test_day_plan_summarizes_schedule() {
        let cfg = SchedulerConfig::new(9, 17, 10);
        let tasks = vec![
            Task::new("a", "a", 45, EnergyLevel::High),
            Task::new("b", "b", 30, EnergyLevel::Medium),
        ];
        let scheduled = schedule_tasks(&tasks, &cfg).unwrap();
        let plan = DayPlan::from_schedule(day(2), scheduled, &cfg);
        assert_eq!(plan.total_duration, 75);
        assert_eq!(plan.start_time, "09:00");
        assert_eq!(plan.end_time, "17:00");
        assert_eq!(plan.tasks.len(), 2);
    }

    #[test]
    fn test_feedback_rating_range() {
        assert!(DayFeedback::new(day(1), 0).is_err());
        assert!(DayFeedback::new(day(1), 6).is_err());
        assert!(DayFeedback::new(day(1), 5).is_ok());
    }

    #[test]
    fn test_feedback_log_replaces_same_date() {
        let mut log = FeedbackLog::new();
        log.save(DayFeedback::new(day(1), 2).unwrap());
        log.save(DayFeedback::new(day(2), 4).unwrap());
        log.save(DayFeedback::new(day(1), 5).unwrap().with_notes("better"));

        assert_eq!(log.len(), 2);
        let d1 = log.for_date(day(1)).unwrap();
        assert_eq!(d1.rating, 5);
        assert_eq!(d1.notes.as_deref(), Some("better"));
        assert!(log.for_date(day(3)).is_none());
    }

    #[test]
    fn test_feedback_log_serializes_as_list() {
        let mut log = FeedbackLog::new();
        log.save(
            DayFeedback::new(day(1), 3)
                .unwrap()
                .with_completed(vec!["t1".to_string()]),
        );
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["date"], "2026-03-01");
        assert_eq!(json[0]["completedTasks"][0], "t1");
    }
}
