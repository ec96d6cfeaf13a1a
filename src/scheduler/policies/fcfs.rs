/*!
 * First-Come-First-Served
 * Non-preemptive, arrival-ordered, single pass
 */

use super::super::idle::IdleStrategy;
use super::super::timeline::Timeline;
use super::super::traits::SchedulingAlgorithm;
use super::super::types::Policy;
use crate::process::Process;
use log::debug;

/// Run processes to completion in arrival order
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    // Idle gaps are skipped directly: a late arrival starts at its arrival time.
    fn run(&self, mut tasks: Vec<Process>, _idle: IdleStrategy) -> Timeline {
        // Stable: equal arrivals keep insertion order
        tasks.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut now = 0;
        for task in &mut tasks {
            let start = now.max(task.arrival);
            let end = start + task.execute(task.burst);
            debug!("fcfs: {} runs {}..{}", task.name, start, end);
            timeline.push(&task.name, start, end);
            now = end;
        }
        timeline
    }
}
