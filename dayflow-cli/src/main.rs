use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dayflow_core::{
    build_schedule, calculate_day_stats, format_time_range, generate_task_id,
    generate_time_blocks, optimal_energy_level, time_to_minutes, DayFeedback, DayPlan,
    EnergyLevel, Task,
};
use log::info;

mod config;
mod reminders_cmd;
mod state;

use config::{load_settings, SettingsCommand};

#[derive(Parser, Debug)]
#[command(
    name = "dayflow",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DAYFLOW_BUILD_SHA"), ")"),
    about = "Plan your day around your energy"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task
    Add {
        #[arg(long)]
        name: String,

        /// Minutes
        #[arg(long)]
        duration: i32,

        /// low | medium | high
        #[arg(long, default_value = "medium")]
        energy: EnergyLevel,

        /// Optional HH:MM to be reminded about
        #[arg(long)]
        target_time: Option<String>,

        /// Minutes before target time (default: 10 when --target-time is set)
        #[arg(long)]
        remind_before: Option<i32>,
    },

    /// List stored tasks
    List,

    /// Remove a task by id
    Remove { id: String },

    /// Toggle a task's completed flag
    Toggle { id: String },

    /// Remove all tasks
    Clear,

    /// Schedule stored tasks into today's working window
    Plan {
        /// Print the day plan as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Plan date (YYYY-MM-DD, default: today in the configured timezone)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Completion stats for stored tasks
    Stats,

    /// Rate a day (1-5)
    Feedback {
        #[arg(long)]
        rating: u8,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Upcoming reminders from task target times
    Reminders {
        /// Override current time (HH:MM)
        #[arg(long)]
        now: Option<String>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the working window as time blocks with their energy tier
    Blocks {
        #[arg(long, default_value_t = 30)]
        block_minutes: i32,
    },

    /// Scheduler settings (~/.dayflow/settings.toml)
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("dayflow {:?}", cli.command);

    match cli.command {
        Command::Add {
            name,
            duration,
            energy,
            target_time,
            remind_before,
        } => add_task(name, duration, energy, target_time, remind_before)?,
        Command::List => list_tasks()?,
        Command::Remove { id } => {
            let mut tasks = state::read_tasks()?;
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                bail!("no task with id {id}");
            }
            state::write_tasks(&tasks)?;
            println!("Removed {id}");
        }
        Command::Toggle { id } => {
            let mut tasks = state::read_tasks()?;
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .with_context(|| format!("no task with id {id}"))?;
            task.completed = !task.completed;
            let done = task.completed;
            state::write_tasks(&tasks)?;
            println!("{id}: {}", if done { "completed" } else { "not completed" });
        }
        Command::Clear => {
            state::write_tasks(&[])?;
            println!("Cleared all tasks");
        }
        Command::Plan { json, date } => plan(json, date)?,
        Command::Stats => {
            let tasks = state::read_tasks()?;
            let stats = calculate_day_stats(&tasks);
            println!("Tasks:      {} ({} completed)", stats.total_tasks, stats.completed_tasks);
            println!("Completion: {:.0}%", stats.completion_rate);
            println!("Workload:   {} min", stats.total_duration);
            println!("Energy:     mostly {}", stats.average_energy_level);
        }
        Command::Feedback { rating, notes, date } => {
            let date = match date {
                Some(d) => d,
                None => load_settings()?.local_now()?.date_naive(),
            };
            let completed = state::read_tasks()?
                .into_iter()
                .filter(|t| t.completed)
                .map(|t| t.id)
                .collect();

            let mut feedback = DayFeedback::new(date, rating)?.with_completed(completed);
            if let Some(n) = notes {
                feedback = feedback.with_notes(n);
            }

            let mut log = state::read_feedback()?;
            log.save(feedback);
            state::write_feedback(&log)?;
            println!("Saved feedback for {date}");
        }
        Command::Reminders { now, json } => reminders_cmd::run(now, json)?,
        Command::Blocks { block_minutes } => {
            let cfg = load_settings()?.schedule;
            for block in generate_time_blocks(cfg.start_hour, cfg.end_hour, block_minutes) {
                let hour = time_to_minutes(&block)? / 60;
                println!("{block}  {}", optimal_energy_level(hour));
            }
        }
        Command::Settings { command } => config::run(command)?,
    }

    Ok(())
}

fn add_task(
    name: String,
    duration: i32,
    energy: EnergyLevel,
    target_time: Option<String>,
    remind_before: Option<i32>,
) -> Result<()> {
    if duration <= 0 {
        bail!("duration must be positive minutes, got {duration}");
    }

    let mut task = Task::new(generate_task_id(), name, duration, energy);
    if let Some(t) = target_time {
        time_to_minutes(&t).with_context(|| format!("--target-time {t}"))?;
        task = task.with_target_time(t).with_reminder(remind_before.unwrap_or(10));
    }

    let mut tasks = state::read_tasks()?;
    println!("Added {} ({}m, {})", task.id, task.duration, task.energy_level);
    tasks.push(task);
    state::write_tasks(&tasks)?;
    Ok(())
}

fn list_tasks() -> Result<()> {
    let tasks = state::read_tasks()?;
    if tasks.is_empty() {
        println!("No tasks. Add one: dayflow add --name <name> --duration <minutes>");
        return Ok(());
    }

    for t in &tasks {
        let check = if t.completed { "x" } else { " " };
        let target = t
            .target_time
            .as_deref()
            .map(|tt| format!(" @ {tt}"))
            .unwrap_or_default();
        println!(
            "[{check}] {} | {} | {}m | {}{target}",
            t.id, t.name, t.duration, t.energy_level
        );
    }
    Ok(())
}

fn plan(json: bool, date: Option<NaiveDate>) -> Result<()> {
    let settings = load_settings()?;
    let date = match date {
        Some(d) => d,
        None => settings.local_now()?.date_naive(),
    };

    let tasks = state::read_tasks()?;
    let outcome = build_schedule(&tasks, &settings.schedule)?;
    let plan = DayPlan::from_schedule(date, outcome.scheduled, &settings.schedule);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("# Plan for {}\n", plan.date);
    println!("Window: {}\n", format_time_range(&plan.start_time, &plan.end_time));

    if plan.tasks.is_empty() && outcome.unplaced.is_empty() {
        println!("(no tasks; add some with `dayflow add`)");
        return Ok(());
    }

    for s in &plan.tasks {
        let check = if s.task.completed { "x" } else { " " };
        println!(
            "[{check}] {}  {} ({}m, {})",
            s.time_block, s.task.name, s.task.duration, s.task.energy_level
        );
    }
    println!("\nScheduled: {} min of work", plan.total_duration);

    if !outcome.unplaced.is_empty() {
        println!("\n## Did not fit\n");
        for t in &outcome.unplaced {
            println!("- {} ({}m, {})", t.name, t.duration, t.energy_level);
        }
    }

    Ok(())
}
