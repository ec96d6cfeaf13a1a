/*!
 * Shortest-Remaining-Time
 * Preemptive; re-evaluated every tick, contiguous runs merged
 */

use super::super::idle::IdleStrategy;
use super::super::timeline::Timeline;
use super::super::traits::SchedulingAlgorithm;
use super::super::types::Policy;
use crate::process::Process;
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTime;

impl ShortestRemainingTime {
    /// Index of the ready task with least remaining work; ties go to set order
    fn pick(tasks: &[Process], now: u64) -> Option<usize> {
        tasks
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready(now))
            .min_by_key(|(i, p)| (p.remaining, *i))
            .map(|(i, _)| i)
    }
}

impl SchedulingAlgorithm for ShortestRemainingTime {
    fn policy(&self) -> Policy {
        Policy::Srt
    }

    fn run(&self, mut tasks: Vec<Process>, idle: IdleStrategy) -> Timeline {
        let mut timeline = Timeline::new();
        let mut now = 0;
        // Task that held the CPU during the previous tick
        let mut running = None;

        while tasks.iter().any(|p| !p.is_complete()) {
            let Some(index) = Self::pick(&tasks, now) else {
                now = idle.advance(now, &tasks);
                running = None;
                continue;
            };

            let task = &mut tasks[index];
            if running != Some(index) {
                debug!("srt: {} dispatched at {}", task.name, now);
            }
            task.execute(1);
            timeline.push_merged(&task.name, now, now + 1);
            running = Some(index);
            now += 1;
        }
        timeline
    }
}
