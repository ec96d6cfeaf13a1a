/*!
 * Simulator
 * Front-end facing contract: manage the process set and run policies
 */

mod builder;

pub use builder::SimulatorBuilder;

use crate::core::config::SimConfig;
use crate::core::types::SchedulerResult;
use crate::monitoring::RunSpan;
use crate::process::{Process, ProcessSet};
use crate::scheduler::{schedule_with, EngineOptions, Policy, Timeline, TimelineStats};
use log::info;
use std::sync::atomic::{AtomicU64, Ordering};

/// Owns a process set and runs scheduling policies over it
///
/// Scheduling never mutates the stored processes, so any sequence of
/// `schedule` calls over an unchanged set is reproducible.
#[derive(Debug)]
pub struct Simulator {
    processes: ProcessSet,
    config: SimConfig,
    runs: AtomicU64,
}

impl Simulator {
    /// Create a simulator with default configuration
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            processes: ProcessSet::new(),
            config,
            runs: AtomicU64::new(0),
        }
    }

    /// Create a builder for custom configuration
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    /// Add a process; see [`ProcessSet::add`] for the failure modes
    pub fn add_process(&mut self, name: &str, arrival: i64, burst: i64) -> SchedulerResult<Process> {
        self.processes.add(name, arrival, burst)
    }

    /// Remove every stored process
    pub fn clear_all(&mut self) {
        self.processes.clear();
        info!("Simulator cleared");
    }

    pub fn processes(&self) -> &ProcessSet {
        &self.processes
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run `policy` with the configured quantum and idle strategy
    pub fn schedule(&self, policy: Policy) -> SchedulerResult<Timeline> {
        self.schedule_with_quantum(policy, self.config.quantum)
    }

    /// Run `policy` with an explicit round-robin quantum
    pub fn schedule_with_quantum(&self, policy: Policy, quantum: i64) -> SchedulerResult<Timeline> {
        let options = EngineOptions::new(policy)
            .with_quantum(quantum)
            .with_idle(self.config.idle_strategy);

        let run_id = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let span = RunSpan::new(run_id, policy, self.processes.len());
        let outcome = {
            let _entered = span.enter();
            schedule_with(&self.processes, &options)
        };
        span.record_outcome(&outcome);
        outcome
    }

    /// Metrics for a timeline produced from this simulator's processes
    pub fn stats(&self, timeline: &Timeline) -> TimelineStats {
        TimelineStats::from_timeline(&self.processes, timeline)
    }

    /// Number of `schedule` calls made so far, including rejected ones
    pub fn run_count(&self) -> u64 {
        self.runs.load(Ordering::Relaxed)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
