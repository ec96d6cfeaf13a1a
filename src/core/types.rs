/*!
 * Core Types
 * Common types used across the simulator
 */

use super::data_structures::InlineString;

/// Simulated time, in abstract CPU ticks
pub type Ticks = u64;

/// Process identifier as supplied by the caller
pub type ProcessName = InlineString;

/// Common result type for simulator operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
