use anyhow::Result;
use chrono::Timelike;
use dayflow_core::{due_reminders, time_to_minutes};

use crate::config::load_settings;
use crate::state::read_tasks;

/// List reminders still ahead of `now` (default: local time in the configured timezone).
pub fn run(now: Option<String>, json: bool) -> Result<()> {
    let now_minutes = match now {
        Some(t) => time_to_minutes(&t)?,
        None => {
            let local = load_settings()?.local_now()?;
            (local.hour() * 60 + local.minute()) as i32
        }
    };

    let tasks = read_tasks()?;
    let intents = due_reminders(&tasks, now_minutes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&intents)?);
        return Ok(());
    }

    if intents.is_empty() {
        println!("No upcoming reminders.");
        return Ok(());
    }

    for r in &intents {
        println!("{} | {} (target {}) | {}", r.remind_at, r.task_name, r.target_time, r.body);
    }
    Ok(())
}
