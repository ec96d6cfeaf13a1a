/*!
 * Scheduling Algorithm Trait
 * Interface shared by every policy implementation
 */

use super::idle::IdleStrategy;
use super::timeline::Timeline;
use super::types::Policy;
use crate::process::Process;

/// A scheduling policy turned into a timeline generator
///
/// `run` receives a private working copy of the process set with every
/// `remaining` counter equal to `burst`, and must drive all of them to zero.
pub trait SchedulingAlgorithm {
    /// Policy this algorithm implements
    fn policy(&self) -> Policy;

    /// Simulate until every task completes
    fn run(&self, tasks: Vec<Process>, idle: IdleStrategy) -> Timeline;
}
