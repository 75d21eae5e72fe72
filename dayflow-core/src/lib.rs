//! dayflow-core: single-day task scheduler matching task energy to hours of the day.

pub mod config;
pub mod day;
pub mod energy;
pub mod error;
pub mod reminders;
pub mod scheduler;
pub mod slot;
pub mod task;
pub mod time;

pub use config::{
    SchedulerConfig, DEFAULT_BREAK_DURATION, DEFAULT_END_HOUR, DEFAULT_START_HOUR,
};
pub use day::{calculate_day_stats, DayFeedback, DayPlan, DayStats, FeedbackLog};
pub use energy::{can_place_at_hour, compatibility_score, optimal_energy_level, EnergyLevel};
pub use error::{Result, SchedulerError};
pub use reminders::{due_reminders, project_reminder, ReminderIntent};
pub use scheduler::{build_schedule, schedule_tasks, ScheduleOutcome};
pub use slot::{find_best_slot, Slot, SLOT_GRANULARITY_MINUTES};
pub use task::{generate_task_id, ScheduledTask, Task};
pub use time::{
    add_minutes, format_time_range, generate_time_blocks, minutes_to_time, time_ranges_overlap,
    time_to_minutes,
};
