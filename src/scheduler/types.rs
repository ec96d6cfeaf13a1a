/*!
 * Scheduler Types
 * Policy selection, quantum and engine options
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::{SchedulerResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::idle::IdleStrategy;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job next, non-preemptive
    Sjn,
    /// Shortest remaining time, preemptive per tick
    Srt,
    /// Round-robin with a fixed quantum
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Self::Fcfs, Self::Sjn, Self::Srt, Self::RoundRobin];

    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjn" | "sjf" | "shortest_job_next" => Ok(Self::Sjn),
            "srt" | "srtf" | "shortest_remaining_time" => Ok(Self::Srt),
            "rr" | "round_robin" | "roundrobin" | "round robin" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjn, srt, round_robin",
                s
            )),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjn => "sjn",
            Self::Srt => "srt",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Whether a running process can be interrupted before completion
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin)
    }

    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quantum(Ticks);

impl Quantum {
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::validation(format!(
                "quantum must be positive, got {ticks}"
            )));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM as Ticks)
    }
}

impl<'de> Deserialize<'de> for Quantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Full parameter set for one engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineOptions {
    pub policy: Policy,
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    #[serde(default)]
    pub idle: IdleStrategy,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl EngineOptions {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_QUANTUM,
            idle: IdleStrategy::default(),
        }
    }

    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_idle(mut self, idle: IdleStrategy) -> Self {
        self.idle = idle;
        self
    }
}
