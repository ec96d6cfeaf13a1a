/*!
 * Idle Advancement
 * How simulated time moves while no process is eligible
 */

use crate::core::limits::IDLE_TICK;
use crate::core::types::Ticks;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Idle-time advancement strategy
///
/// Both strategies produce identical timelines; they differ only in how many
/// loop iterations an idle gap costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleStrategy {
    /// Advance one tick at a time and re-check eligibility
    #[default]
    Tick,
    /// Jump straight to the earliest pending arrival
    JumpToNextArrival,
}

impl IdleStrategy {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "tick" | "busy_wait" => Ok(Self::Tick),
            "jump" | "jump_to_next_arrival" | "skip" => Ok(Self::JumpToNextArrival),
            _ => Err(format!("Invalid idle strategy '{}'. Valid: tick, jump", s)),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::JumpToNextArrival => "jump",
        }
    }

    /// Next time to re-examine the ready set, given nothing is ready at `now`
    pub fn advance(&self, now: Ticks, tasks: &[Process]) -> Ticks {
        match self {
            Self::Tick => now + IDLE_TICK,
            Self::JumpToNextArrival => tasks
                .iter()
                .filter(|p| !p.is_complete() && p.arrival > now)
                .map(|p| p.arrival)
                .min()
                .unwrap_or(now + IDLE_TICK),
        }
    }
}
