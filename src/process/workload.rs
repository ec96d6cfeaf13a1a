/*!
 * Workload Loading
 * Read process sets from JSON documents
 */

use super::set::ProcessSet;
use super::types::ProcessSpec;
use crate::core::types::SchedulerResult;
use log::info;
use std::fs;
use std::path::Path;

/// Parse a JSON array of `{"name", "arrival", "burst"}` records
pub fn parse_workload(json: &str) -> SchedulerResult<ProcessSet> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(json)?;
    ProcessSet::from_specs(&specs)
}

/// Load a workload file from disk
pub fn load_workload(path: impl AsRef<Path>) -> SchedulerResult<ProcessSet> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let set = parse_workload(&contents)?;
    info!("Loaded {} processes from {}", set.len(), path.display());
    Ok(set)
}
