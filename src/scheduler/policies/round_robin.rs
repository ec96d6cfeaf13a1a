/*!
 * Round-Robin
 * Fixed-quantum rotation over a queue ordered once by arrival
 */

use super::super::idle::IdleStrategy;
use super::super::timeline::Timeline;
use super::super::traits::SchedulingAlgorithm;
use super::super::types::{Policy, Quantum};
use crate::process::Process;
use log::debug;
use std::collections::VecDeque;

/// Round-robin over a FIFO queue
///
/// The queue is sorted by arrival exactly once, before the first dispatch.
/// A head whose arrival lies in the future makes the CPU idle until that
/// arrival even when a later queue entry has already arrived, and requeued
/// processes always go to the tail regardless of anyone's arrival time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&self, mut tasks: Vec<Process>, _idle: IdleStrategy) -> Timeline {
        tasks.sort_by_key(|p| p.arrival);
        let mut queue: VecDeque<Process> = tasks.into();

        let mut timeline = Timeline::new();
        let mut now = 0;

        while let Some(mut task) = queue.pop_front() {
            now = now.max(task.arrival);
            let ran = task.execute(self.quantum.ticks());
            debug!("rr: {} runs {}..{}", task.name, now, now + ran);
            timeline.push(&task.name, now, now + ran);
            now += ran;

            if !task.is_complete() {
                queue.push_back(task);
            }
        }
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSet;
    use crate::scheduler::Interval;

    fn rr(q: i64) -> RoundRobin {
        RoundRobin::new(Quantum::new(q).unwrap())
    }

    #[test]
    fn test_single_process_is_sliced() {
        let mut set = ProcessSet::new();
        set.add("A", 0, 5).unwrap();
        let timeline = rr(2).run(set.snapshot(), IdleStrategy::Tick);
        assert_eq!(
            timeline.into_vec(),
            vec![
                Interval::new("A", 0, 2),
                Interval::new("A", 2, 4),
                Interval::new("A", 4, 5),
            ]
        );
    }

    #[test]
    fn test_queue_order_is_fixed_at_start() {
        // B (arrival 6) heads the rotation after A's first slice even though
        // the CPU must idle for it; A is only requeued behind B.
        let mut set = ProcessSet::new();
        set.add("A", 0, 4).unwrap();
        set.add("B", 6, 1).unwrap();
        let timeline = rr(2).run(set.snapshot(), IdleStrategy::Tick);
        assert_eq!(
            timeline.into_vec(),
            vec![
                Interval::new("A", 0, 2),
                Interval::new("B", 6, 7),
                Interval::new("A", 7, 9),
            ]
        );
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let mut set = ProcessSet::new();
        set.add("A", 0, 3).unwrap();
        set.add("B", 1, 2).unwrap();
        let timeline = rr(10).run(set.snapshot(), IdleStrategy::Tick);
        assert_eq!(
            timeline.into_vec(),
            vec![Interval::new("A", 0, 3), Interval::new("B", 3, 5)]
        );
    }
}
