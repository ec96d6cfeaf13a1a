/*!
 * Process Module
 * Process set model: validated, bounded input for the scheduling engine
 */

pub mod set;
pub mod types;
mod validation;
pub mod workload;

pub use set::ProcessSet;
pub use types::{Process, ProcessSpec};
pub use workload::{load_workload, parse_workload};
