/*!
 * Simulator Builder
 * Builder pattern for Simulator construction
 */

use super::Simulator;
use crate::core::config::SimConfig;
use crate::core::types::SchedulerResult;
use crate::process::{ProcessSet, ProcessSpec};
use crate::scheduler::IdleStrategy;
use log::info;

/// Builder for Simulator
#[derive(Debug, Default)]
pub struct SimulatorBuilder {
    config: SimConfig,
    initial: Option<ProcessSet>,
    specs: Vec<ProcessSpec>,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Round-robin quantum used by `Simulator::schedule`
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = quantum;
        self
    }

    pub fn with_idle_strategy(mut self, idle_strategy: IdleStrategy) -> Self {
        self.config.idle_strategy = idle_strategy;
        self
    }

    /// Start from an already validated set, e.g. one read by `load_workload`
    pub fn with_process_set(mut self, set: ProcessSet) -> Self {
        self.initial = Some(set);
        self
    }

    /// Preload processes; they are validated in `build`
    pub fn with_processes<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        self.specs.extend(specs);
        self
    }

    /// Validate configuration and processes, then build
    pub fn build(self) -> SchedulerResult<Simulator> {
        self.config.validate()?;
        let mut processes = self.initial.unwrap_or_default();
        for spec in &self.specs {
            processes.add(&spec.name, spec.arrival, spec.burst)?;
        }

        info!(
            "Simulator built: quantum={}, idle={}, processes={}",
            self.config.quantum,
            self.config.idle_strategy.as_str(),
            processes.len()
        );

        let mut simulator = Simulator::with_config(self.config);
        simulator.processes = processes;
        Ok(simulator)
    }
}
