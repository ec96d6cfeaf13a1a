/*!
 * Scheduler Module
 * Scheduling engine: four classical policies producing execution timelines
 */

pub mod engine;
pub mod idle;
pub mod policies;
pub mod stats;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use engine::{algorithm_for, schedule, schedule_all, schedule_with};
pub use idle::IdleStrategy;
pub use stats::{ProcessMetrics, TimelineStats};
pub use timeline::{Interval, Timeline};
pub use traits::SchedulingAlgorithm;
pub use types::{EngineOptions, Policy, Quantum};
