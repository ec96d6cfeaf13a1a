/*!
 * Shortest-Job-Next
 * Non-preemptive; the shortest burst among arrived processes runs next
 */

use super::super::idle::IdleStrategy;
use super::super::timeline::Timeline;
use super::super::traits::SchedulingAlgorithm;
use super::super::types::Policy;
use crate::process::Process;
use log::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobNext;

impl ShortestJobNext {
    /// Index of the shortest ready job; ties go to the earliest in `tasks`
    fn pick(tasks: &[Process], now: u64) -> Option<usize> {
        tasks
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready(now))
            .min_by_key(|(i, p)| (p.burst, *i))
            .map(|(i, _)| i)
    }
}

impl SchedulingAlgorithm for ShortestJobNext {
    fn policy(&self) -> Policy {
        Policy::Sjn
    }

    fn run(&self, mut tasks: Vec<Process>, idle: IdleStrategy) -> Timeline {
        // Tie order for equal bursts is the (arrival, burst) sorted order
        tasks.sort_by_key(|p| (p.arrival, p.burst));

        let mut timeline = Timeline::new();
        let mut now = 0;
        let mut pending = tasks.len();

        while pending > 0 {
            let Some(index) = Self::pick(&tasks, now) else {
                now = idle.advance(now, &tasks);
                continue;
            };

            let task = &mut tasks[index];
            let start = now.max(task.arrival);
            let end = start + task.execute(task.burst);
            debug!("sjn: {} runs {}..{}", task.name, start, end);
            timeline.push(&task.name, start, end);
            now = end;
            pending -= 1;
        }
        timeline
    }
}
