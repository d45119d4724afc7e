//! Exploration-rate schedules for training runs
//!
//! A schedule splits a run into phases by the fraction of games played.
//! Game `i` of `n` (1-based) uses the last phase whose start fraction is at
//! most `i / n`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One phase of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulePhase {
    /// Fraction of the run at which this phase begins, in [0, 1]
    pub start_fraction: f64,
    /// Exploration rate used throughout the phase
    pub epsilon: f64,
}

impl SchedulePhase {
    pub fn new(start_fraction: f64, epsilon: f64) -> Self {
        Self {
            start_fraction,
            epsilon,
        }
    }
}

/// Piecewise-constant exploration rate over a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsilonSchedule {
    phases: Vec<SchedulePhase>,
}

impl EpsilonSchedule {
    /// Build a schedule from phases in ascending start order.
    ///
    /// # Errors
    ///
    /// Returns error if there are no phases, the first does not start at 0,
    /// starts are not strictly increasing within [0, 1], or any rate lies
    /// outside [0, 1].
    pub fn new(phases: Vec<SchedulePhase>) -> Result<Self> {
        let invalid = |message: String| Error::InvalidConfiguration { message };

        let first = phases
            .first()
            .ok_or_else(|| invalid("schedule needs at least one phase".to_string()))?;
        if first.start_fraction != 0.0 {
            return Err(invalid(format!(
                "first phase must start at 0, got {}",
                first.start_fraction
            )));
        }
        for pair in phases.windows(2) {
            if pair[1].start_fraction <= pair[0].start_fraction {
                return Err(invalid(format!(
                    "phase starts must increase: {} then {}",
                    pair[0].start_fraction, pair[1].start_fraction
                )));
            }
        }
        for phase in &phases {
            if !(0.0..=1.0).contains(&phase.start_fraction) {
                return Err(invalid(format!(
                    "phase start {} outside [0, 1]",
                    phase.start_fraction
                )));
            }
            crate::config::validate_rate("epsilon", phase.epsilon)?;
        }

        Ok(Self { phases })
    }

    /// Same rate for the whole run
    pub fn constant(epsilon: f64) -> Result<Self> {
        Self::new(vec![SchedulePhase::new(0.0, epsilon)])
    }

    pub fn phases(&self) -> &[SchedulePhase] {
        &self.phases
    }

    /// Rate for game `game` (1-based) of `total_games`
    pub fn epsilon_for(&self, game: usize, total_games: usize) -> f64 {
        let fraction = if total_games == 0 {
            0.0
        } else {
            game as f64 / total_games as f64
        };
        self.phases
            .iter()
            .rev()
            .find(|phase| fraction >= phase.start_fraction)
            .unwrap_or(&self.phases[0])
            .epsilon
    }
}

impl Default for EpsilonSchedule {
    /// 0.75 for the first 30% of games, 0.2 until 70%, then greedy.
    fn default() -> Self {
        Self {
            phases: vec![
                SchedulePhase::new(0.0, 0.75),
                SchedulePhase::new(0.3, 0.2),
                SchedulePhase::new(0.7, 0.0),
            ],
        }
    }
}

impl FromStr for EpsilonSchedule {
    type Err = Error;

    /// Parse `start:epsilon` pairs separated by commas, e.g.
    /// `0:0.75,0.3:0.2,0.7:0`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: String| Error::ParseSchedule {
            input: s.to_string(),
            reason,
        };

        let mut phases = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (start, epsilon) = entry
                .split_once(':')
                .ok_or_else(|| parse_error(format!("expected start:epsilon, got '{entry}'")))?;
            let start: f64 = start
                .trim()
                .parse()
                .map_err(|_| parse_error(format!("invalid phase start '{start}'")))?;
            let epsilon: f64 = epsilon
                .trim()
                .parse()
                .map_err(|_| parse_error(format!("invalid epsilon '{epsilon}'")))?;
            phases.push(SchedulePhase::new(start, epsilon));
        }

        Self::new(phases).map_err(|e| parse_error(e.to_string()))
    }
}

impl fmt::Display for EpsilonSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .phases
            .iter()
            .map(|phase| format!("{}:{}", phase.start_fraction, phase.epsilon))
            .collect();
        f.write_str(&parts.join(","))
    }
}
