//! Reminder projection from a task's optional target time.
//!
//! Delivery is someone else's job. This only decides *when* and *what*.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::task::Task;
use crate::time::{minutes_to_time, time_to_minutes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderIntent {
    pub task_id: String,
    pub task_name: String,
    pub target_time: String,
    pub remind_at: String,
    pub lead_minutes: i32,
    pub body: String,
}

impl ReminderIntent {
    fn remind_at_minutes(&self) -> Result<i32> {
        time_to_minutes(&self.remind_at)
    }
}

/// Project one task. `None` for completed tasks and tasks without a target.
pub fn project_reminder(task: &Task) -> Result<Option<ReminderIntent>> {
    if task.completed {
        return Ok(None);
    }
    let Some(target) = task.target_time.as_deref() else {
        return Ok(None);
    };

    let target_minutes = time_to_minutes(target)?;
    let lead = task.remind_before_minutes.unwrap_or(0).max(0);
    let remind_at = (target_minutes - lead).max(0);

    let body = if lead > 0 {
        format!("Your task \"{}\" starts in {} minutes.", task.name, lead)
    } else {
        format!("Time to start \"{}\".", task.name)
    };

    Ok(Some(ReminderIntent {
        task_id: task.id.clone(),
        task_name: task.name.clone(),
        target_time: target.to_string(),
        remind_at: minutes_to_time(remind_at),
        lead_minutes: lead,
        body,
    }))
}

/// Reminders still ahead of `now_minutes`, earliest first. Reminders whose
/// time has already passed are skipped rather than fired late.
pub fn due_reminders(tasks: &[Task], now_minutes: i32) -> Result<Vec<ReminderIntent>> {
    let mut out = Vec::new();
    for task in tasks {
        let Some(intent) = project_reminder(task)? else {
            continue;
        };
        let at = intent.remind_at_minutes()?;
        if at > now_minutes {
            out.push((at, intent));
        }
    }

    out.sort_by_key(|(at, _)| *at);
    Ok(out.into_iter().map(|(_, intent)| intent).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyLevel;

    fn task(id: &str) -> Task {
        Task::new(id, format!("task {id}"), 30, EnergyLevel::Medium)
    }

    #[test]
    fn completed_or_untargeted_emits_none() {
        assert!(project_reminder(&task("t1")).unwrap().is_none());
        let done = task("t2").with_target_time("10:00").completed();
        assert!(project_reminder(&done).unwrap().is_none());
    }

    #[test]
    fn lead_time_shifts_remind_at() {
        let t = task("t1").with_target_time("10:00").with_reminder(15);
        let intent = project_reminder(&t).unwrap().unwrap();
        assert_eq!(intent.remind_at, "09:45");
        assert_eq!(intent.lead_minutes, 15);
        assert!(intent.body.contains("starts in 15 minutes"));
    }

    #[test]
    fn zero_lead_reminds_at_target() {
        let intent = project_reminder(&task("t1").with_target_time("07:30"))
            .unwrap()
            .unwrap();
        assert_eq!(intent.remind_at, "07:30");
        assert_eq!(intent.body, "Time to start \"task t1\".");
    }

    #[test]
    fn lead_past_midnight_clamps() {
        let t = task("t1").with_target_time("00:10").with_reminder(30);
        assert_eq!(project_reminder(&t).unwrap().unwrap().remind_at, "00:00");
    }

    #[test]
    fn malformed_target_is_an_error() {
        assert!(project_reminder(&task("t1").with_target_time("ten")).is_err());
    }

    #[test]
    fn due_skips_past_and_sorts() {
        let tasks = vec![
            task("late").with_target_time("16:00"),
            task("past").with_target_time("08:00"),
            task("soon").with_target_time("11:00").with_reminder(10),
            task("none"),
        ];
        let due = due_reminders(&tasks, 9 * 60).unwrap();
        let ids: Vec<&str> = due.iter().map(|r| r.task_id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "late"]);
    }
}
