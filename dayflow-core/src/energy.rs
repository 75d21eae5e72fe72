//! Energy model: which tier of work suits which hour of the day.
//!
//! Hour tiers:
//! - [6, 10)  high   (morning peak)
//! - [10, 15) medium
//! - otherwise low   (afternoon, evening, night)
//!
//! The compatibility table rewards matching tiers. Medium and low tasks still
//! score acceptably elsewhere, high tasks are pushed hard toward the morning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Scheduling priority: high tasks are considered first.
    pub fn priority(self) -> u8 {
        match self {
            EnergyLevel::High => 3,
            EnergyLevel::Medium => 2,
            EnergyLevel::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" | "med" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            other => Err(format!("unknown energy level: {other} (expected low|medium|high)")),
        }
    }
}

/// Optimal energy tier for an hour of the day.
pub fn optimal_energy_level(hour: i32) -> EnergyLevel {
    match hour {
        6..=9 => EnergyLevel::High,
        10..=14 => EnergyLevel::Medium,
        _ => EnergyLevel::Low,
    }
}

/// Score 0..=10 for running a task of `task_energy` at `hour`.
pub fn compatibility_score(task_energy: EnergyLevel, hour: i32) -> u8 {
    use EnergyLevel::*;

    match (task_energy, optimal_energy_level(hour)) {
        (High, High) => 10,
        (High, Medium) => 5,
        (High, Low) => 1,

        (Medium, High) => 8,
        (Medium, Medium) => 10,
        (Medium, Low) => 5,

        (Low, High) => 6,
        (Low, Medium) => 8,
        (Low, Low) => 10,
    }
}

/// Hard placement rule: high only in high hours, medium in medium or high
/// hours, low anywhere. The scheduler scores instead of filtering; this is
/// for callers that want a yes/no answer.
pub fn can_place_at_hour(task_energy: EnergyLevel, hour: i32) -> bool {
    let optimal = optimal_energy_level(hour);
    match task_energy {
        EnergyLevel::High => optimal == EnergyLevel::High,
        EnergyLevel::Medium => matches!(optimal, EnergyLevel::Medium | EnergyLevel::High),
        EnergyLevel::Low => true,
    }
}
