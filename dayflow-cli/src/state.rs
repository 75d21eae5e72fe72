use anyhow::{Context, Result};
use dayflow_core::{FeedbackLog, Task};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// `$DAYFLOW_HOME`, or `~/.dayflow`.
pub fn dayflow_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DAYFLOW_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".dayflow"))
}

pub fn ensure_dayflow_home() -> Result<PathBuf> {
    let dir = dayflow_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn tasks_path() -> Result<PathBuf> {
    Ok(ensure_dayflow_home()?.join("tasks.json"))
}

pub fn feedback_path() -> Result<PathBuf> {
    Ok(ensure_dayflow_home()?.join("feedback.json"))
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn read_tasks() -> Result<Vec<Task>> {
    read_json_or_default(&tasks_path()?)
}

pub fn write_tasks(tasks: &[Task]) -> Result<()> {
    write_json(&tasks_path()?, tasks)
}

pub fn read_feedback() -> Result<FeedbackLog> {
    read_json_or_default(&feedback_path()?)
}

pub fn write_feedback(log: &FeedbackLog) -> Result<()> {
    write_json(&feedback_path()?, log)
}
