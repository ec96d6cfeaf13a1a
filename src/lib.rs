/*!
 * CPU Scheduling Simulator Library
 * Process set model and the FCFS / SJN / SRT / Round-Robin timeline engine
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod simulator;

// Re-exports
pub use crate::core::errors::{ErrorKind, SchedulerError};
pub use crate::core::limits::{DEFAULT_QUANTUM, MAX_PROCESSES, MAX_TICKS};
pub use crate::core::types::{ProcessName, SchedulerResult, Ticks};
pub use crate::core::SimConfig;
pub use monitoring::{init_tracing, init_tracing_with};
pub use process::{load_workload, parse_workload, Process, ProcessSet, ProcessSpec};
pub use scheduler::{
    schedule, schedule_all, schedule_with, EngineOptions, IdleStrategy, Interval, Policy,
    ProcessMetrics, Quantum, SchedulingAlgorithm, Timeline, TimelineStats,
};
pub use simulator::{Simulator, SimulatorBuilder};
