/*!
 * Process Types
 * The schedulable unit of work and its serialisable input record
 */

use crate::core::types::{ProcessName, Ticks};
use serde::{Deserialize, Serialize};

/// One schedulable unit of work
///
/// `burst` is fixed at creation. `remaining` counts down while the engine runs
/// a private copy of the process, so `0 <= remaining <= burst` always holds
/// and `remaining == 0` exactly when the process has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub name: ProcessName,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
}

impl Process {
    /// Construct an already-validated process
    pub(crate) fn new(name: ProcessName, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            name,
            arrival,
            burst,
            remaining: burst,
        }
    }

    /// Restore `remaining` to the full burst
    #[inline]
    pub fn reset(&mut self) {
        self.remaining = self.burst;
    }

    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Eligible to run at `now`
    #[inline(always)]
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.arrival <= now && !self.is_complete()
    }

    /// Consume up to `ticks` of CPU time, returning how much was actually used
    #[inline]
    pub fn execute(&mut self, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining);
        self.remaining -= used;
        used
    }

    /// CPU time consumed so far
    #[inline]
    pub fn consumed(&self) -> Ticks {
        self.burst - self.remaining
    }
}

/// Unvalidated process description as entered by a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    #[serde(default)]
    pub arrival: i64,
    pub burst: i64,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }
}
