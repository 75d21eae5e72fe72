//! Task model for the day scheduler.
//!
//! JSON field names are camelCase so stored task lists stay readable by the
//! web front end that shares the `dayflow-*` data.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::energy::EnergyLevel;

/// A task as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,

    /// Minutes, positive.
    pub duration: i32,

    pub energy_level: EnergyLevel,

    #[serde(default)]
    pub completed: bool,

    /// Optional `HH:MM` the user wants to be reminded about.
    /// Ignored by the scheduler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,

    /// Lead time before `target_time`. Ignored by the scheduler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remind_before_minutes: Option<i32>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: i32,
        energy_level: EnergyLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            energy_level,
            completed: false,
            target_time: None,
            remind_before_minutes: None,
        }
    }

    pub fn with_target_time(mut self, time: impl Into<String>) -> Self {
        self.target_time = Some(time.into());
        self
    }

    pub fn with_reminder(mut self, minutes_before: i32) -> Self {
        self.remind_before_minutes = Some(minutes_before);
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// A task with an assigned slot. Built only by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub task: Task,
    pub scheduled_start_time: String,
    pub scheduled_end_time: String,
    /// `"{start}-{end}"`, e.g. `"09:00-10:30"`.
    pub time_block: String,
}

impl ScheduledTask {
    pub(crate) fn new(task: Task, start: String, end: String) -> Self {
        let time_block = format!("{start}-{end}");
        Self {
            task,
            scheduled_start_time: start,
            scheduled_end_time: end,
            time_block,
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }
}

/// `task-<unix millis>-<9 base36 chars>`. Collision resistant enough for a
/// single user's task list; uniqueness is the caller's responsibility.
pub fn generate_task_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    format!("task-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_have_expected_shape() {
        let id = generate_task_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "task");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_task_id(), generate_task_id());
    }

    #[test]
    fn test_task_json_is_camel_case() {
        let t = Task::new("t1", "write report", 60, EnergyLevel::High)
            .with_target_time("09:30")
            .with_reminder(10);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["energyLevel"], "high");
        assert_eq!(json["targetTime"], "09:30");
        assert_eq!(json["remindBeforeMinutes"], 10);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let t: Task = serde_json::from_str(
            r#"{"id":"t1","name":"email","duration":30,"energyLevel":"low"}"#,
        )
        .unwrap();
        assert!(!t.completed);
        assert!(t.target_time.is_none());
    }

    #[test]
    fn test_scheduled_task_flattens_and_builds_block() {
        let t = Task::new("t1", "email", 30, EnergyLevel::Low);
        let st = ScheduledTask::new(t, "08:45".into(), "09:15".into());
        assert_eq!(st.time_block, "08:45-09:15");
        let json = serde_json::to_value(&st).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["scheduledStartTime"], "08:45");
        assert_eq!(json["timeBlock"], "08:45-09:15");
    }
}
