use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Subcommand;
use dayflow_core::SchedulerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_dayflow_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub schedule: SchedulerConfig,
    #[serde(default)]
    pub profile: ProfileSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    /// IANA timezone used for "today" and "now".
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Settings {
    pub fn tz(&self) -> Result<Tz> {
        self.profile
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {}", self.profile.timezone))
    }

    pub fn local_now(&self) -> Result<DateTime<Tz>> {
        Ok(Utc::now().with_timezone(&self.tz()?))
    }
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings
    Show,

    /// Write default settings.toml if missing
    Init,

    /// Update one or more settings
    Set {
        #[arg(long)]
        start_hour: Option<i32>,

        #[arg(long)]
        end_hour: Option<i32>,

        /// Break after each task, minutes
        #[arg(long)]
        break_duration: Option<i32>,

        /// IANA timezone, e.g. Europe/Paris
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Restore defaults
    Reset,
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(ensure_dayflow_home()?.join("settings.toml"))
}

pub fn load_settings() -> Result<Settings> {
    let p = settings_path()?;
    if !p.exists() {
        return Ok(Settings::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse settings.toml")
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let p = settings_path()?;
    let s = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn run(cmd: SettingsCommand) -> Result<()> {
    match cmd {
        SettingsCommand::Show => {
            let settings = load_settings()?;
            print!("{}", toml::to_string_pretty(&settings).context("serialize settings")?);
        }
        SettingsCommand::Init => {
            let p = settings_path()?;
            if p.exists() {
                println!("Settings already exist: {}", p.display());
                return Ok(());
            }
            save_settings(&Settings::default())?;
            println!("Wrote {}", p.display());
        }
        SettingsCommand::Set {
            start_hour,
            end_hour,
            break_duration,
            timezone,
        } => {
            let mut settings = load_settings()?;
            if let Some(h) = start_hour {
                settings.schedule.start_hour = h;
            }
            if let Some(h) = end_hour {
                settings.schedule.end_hour = h;
            }
            if let Some(b) = break_duration {
                settings.schedule.break_duration = b;
            }
            if let Some(tz) = timezone {
                settings.profile.timezone = tz;
            }

            settings.schedule.validate()?;
            settings.tz()?;
            save_settings(&settings)?;
            println!("Updated {}", settings_path()?.display());
        }
        SettingsCommand::Reset => {
            save_settings(&Settings::default())?;
            println!("Settings reset to defaults");
        }
    }
    Ok(())
}
