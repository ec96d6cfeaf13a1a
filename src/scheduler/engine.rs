/*!
 * Scheduling Engine
 * Pure `(ProcessSet, Policy, Quantum) -> Timeline` entry points
 */

use super::idle::IdleStrategy;
use super::policies::{Fcfs, RoundRobin, ShortestJobNext, ShortestRemainingTime};
use super::timeline::Timeline;
use super::traits::SchedulingAlgorithm;
use super::types::{EngineOptions, Policy, Quantum};
use crate::core::errors::SchedulerError;
use crate::core::types::SchedulerResult;
use crate::process::ProcessSet;
use log::info;
use tracing::info_span;

/// Schedule with the default idle strategy
///
/// `quantum` is only consulted for [`Policy::RoundRobin`].
pub fn schedule(set: &ProcessSet, policy: Policy, quantum: i64) -> SchedulerResult<Timeline> {
    schedule_with(set, &EngineOptions::new(policy).with_quantum(quantum))
}

/// Schedule with explicit engine options
///
/// The stored processes are never touched: the run operates on
/// [`ProcessSet::snapshot`], so repeated calls return identical timelines.
pub fn schedule_with(set: &ProcessSet, options: &EngineOptions) -> SchedulerResult<Timeline> {
    if set.is_empty() {
        return Err(SchedulerError::EmptyInput);
    }

    let algorithm = algorithm_for(options.policy, options.quantum)?;

    let span = info_span!(
        "schedule",
        policy = options.policy.as_str(),
        processes = set.len(),
        quantum = options.quantum,
        idle = options.idle.as_str()
    );
    let _guard = span.enter();

    let timeline = algorithm.run(set.snapshot(), options.idle);

    debug_assert_eq!(
        timeline.total_busy(),
        set.total_burst(),
        "timeline must account for every burst tick"
    );

    info!(
        "Scheduled {} processes with {}: {} intervals, makespan {}",
        set.len(),
        options.policy,
        timeline.len(),
        timeline.makespan()
    );
    Ok(timeline)
}

/// Build the algorithm for a policy, validating the quantum for round-robin
pub fn algorithm_for(policy: Policy, quantum: i64) -> SchedulerResult<Box<dyn SchedulingAlgorithm>> {
    Ok(match policy {
        Policy::Fcfs => Box::new(Fcfs),
        Policy::Sjn => Box::new(ShortestJobNext),
        Policy::Srt => Box::new(ShortestRemainingTime),
        Policy::RoundRobin => Box::new(RoundRobin::new(Quantum::new(quantum)?)),
    })
}

/// Run every policy over the same set, in [`Policy::ALL`] order
pub fn schedule_all(
    set: &ProcessSet,
    quantum: i64,
    idle: IdleStrategy,
) -> SchedulerResult<Vec<(Policy, Timeline)>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let options = EngineOptions::new(policy)
                .with_quantum(quantum)
                .with_idle(idle);
            schedule_with(set, &options).map(|timeline| (policy, timeline))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;
    use crate::scheduler::Interval;

    fn abc() -> ProcessSet {
        let mut set = ProcessSet::new();
        set.add("A", 0, 5).unwrap();
        set.add("B", 1, 3).unwrap();
        set.add("C", 2, 1).unwrap();
        set
    }

    #[test]
    fn test_empty_set_rejected() {
        let set = ProcessSet::new();
        for policy in Policy::ALL {
            let err = schedule(&set, policy, 4).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_empty_checked_before_quantum() {
        let err = schedule(&ProcessSet::new(), Policy::RoundRobin, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_round_robin_rejects_bad_quantum() {
        let set = abc();
        assert_eq!(
            schedule(&set, Policy::RoundRobin, 0).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            schedule(&set, Policy::RoundRobin, -2).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_quantum_ignored_elsewhere() {
        let set = abc();
        assert!(schedule(&set, Policy::Fcfs, 0).is_ok());
        assert!(schedule(&set, Policy::Srt, -1).is_ok());
    }

    #[test]
    fn test_fcfs_reference() {
        let timeline = schedule(&abc(), Policy::Fcfs, 4).unwrap();
        assert_eq!(
            timeline.into_vec(),
            vec![
                Interval::new("A", 0, 5),
                Interval::new("B", 5, 8),
                Interval::new("C", 8, 9),
            ]
        );
    }

    #[test]
    fn test_schedule_all_covers_each_policy() {
        let results = schedule_all(&abc(), 2, IdleStrategy::Tick).unwrap();
        let policies: Vec<_> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
        for (_, timeline) in &results {
            assert_eq!(timeline.total_busy(), 9);
        }
    }

    #[test]
    fn test_algorithm_for_reports_policy() {
        for policy in Policy::ALL {
            assert_eq!(algorithm_for(policy, 3).unwrap().policy(), policy);
        }
    }
}
