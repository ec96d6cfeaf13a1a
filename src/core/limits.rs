/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the limits and defaults of the simulation.
 */

// =============================================================================
// PROCESS SET LIMITS
// =============================================================================

/// Maximum number of processes held by a single process set
/// A sixth insertion is rejected with a capacity error
pub const MAX_PROCESSES: usize = 5;

/// Largest accepted arrival time or burst (ticks)
/// Keeps every simulated clock value well inside `u64`
pub const MAX_TICKS: i64 = u32::MAX as i64;

// =============================================================================
// SCHEDULER DEFAULTS
// =============================================================================

/// Default round-robin time quantum (ticks)
pub const DEFAULT_QUANTUM: i64 = 4;

/// Idle advancement per tick when no process is eligible
pub const IDLE_TICK: u64 = 1;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Round-robin quantum override
pub const ENV_QUANTUM: &str = "SCHEDSIM_QUANTUM";

/// Idle strategy override (`tick` or `jump`)
pub const ENV_IDLE_STRATEGY: &str = "SCHEDSIM_IDLE";

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "SCHEDSIM_TRACE_JSON";
