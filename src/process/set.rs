/*!
 * Process Set
 * Bounded, insertion-ordered collection of processes awaiting simulation
 */

use super::types::{Process, ProcessSpec};
use super::validation::{validate_arrival, validate_burst, validate_name};
use crate::core::errors::SchedulerError;
use crate::core::limits::MAX_PROCESSES;
use crate::core::types::SchedulerResult;
use log::{info, warn};
use serde::Serialize;

/// Insertion-ordered set of at most [`MAX_PROCESSES`] processes
///
/// Names are not deduplicated. Two processes sharing a name are scheduled
/// independently but become indistinguishable in the resulting timeline, so
/// keeping names unique is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    pub fn new() -> Self {
        Self {
            processes: Vec::with_capacity(MAX_PROCESSES),
        }
    }

    /// Build a set from unvalidated specs; the first invalid spec aborts
    pub fn from_specs<'a, I>(specs: I) -> SchedulerResult<Self>
    where
        I: IntoIterator<Item = &'a ProcessSpec>,
    {
        let mut set = Self::new();
        for spec in specs {
            set.add(&spec.name, spec.arrival, spec.burst)?;
        }
        Ok(set)
    }

    /// Validate and append a process, returning the stored copy
    pub fn add(&mut self, name: &str, arrival: i64, burst: i64) -> SchedulerResult<Process> {
        if self.processes.len() >= MAX_PROCESSES {
            return Err(SchedulerError::Capacity {
                current: self.processes.len(),
                limit: MAX_PROCESSES,
            });
        }

        let name = validate_name(name)?;
        let burst = validate_burst(burst)?;
        let arrival = validate_arrival(arrival)?;

        if self.processes.iter().any(|p| p.name == name) {
            warn!(
                "Process name '{}' already present; timeline entries will be ambiguous",
                name
            );
        }

        let process = Process::new(name, arrival, burst);
        self.processes.push(process.clone());
        info!(
            "Process {} added (arrival: {}, burst: {}, {}/{})",
            process.name,
            process.arrival,
            process.burst,
            self.processes.len(),
            MAX_PROCESSES
        );
        Ok(process)
    }

    /// Remove every process; a no-op on an empty set
    pub fn clear(&mut self) {
        if !self.processes.is_empty() {
            info!("Clearing {} processes", self.processes.len());
        }
        self.processes.clear();
    }

    /// Snapshot of the stored processes in insertion order
    pub fn list(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Private working copy for one simulation run, every counter reset
    pub fn snapshot(&self) -> Vec<Process> {
        let mut copy = self.processes.clone();
        copy.iter_mut().for_each(Process::reset);
        copy
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        MAX_PROCESSES
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.processes.len() >= MAX_PROCESSES
    }

    /// Sum of all bursts
    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(|p| p.burst).sum()
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ErrorKind;

    #[test]
    fn test_add_and_list_in_order() {
        let mut set = ProcessSet::new();
        set.add("B", 1, 3).unwrap();
        set.add("A", 0, 5).unwrap();

        let names: Vec<_> = set.list().into_iter().map(|p| p.name.to_string()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(set.total_burst(), 8);
    }

    #[test]
    fn test_add_returns_fresh_process() {
        let mut set = ProcessSet::new();
        let p = set.add("A", 2, 4).unwrap();
        assert_eq!(p.arrival, 2);
        assert_eq!(p.burst, 4);
        assert_eq!(p.remaining, 4);
    }

    #[test]
    fn test_capacity_limit() {
        let mut set = ProcessSet::new();
        for i in 0..MAX_PROCESSES {
            set.add(&format!("P{i}"), 0, 1).unwrap();
        }
        assert!(set.is_full());

        let err = set.add("P5", 0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(set.len(), MAX_PROCESSES);
    }

    #[test]
    fn test_capacity_checked_before_validation() {
        let mut set = ProcessSet::new();
        for i in 0..MAX_PROCESSES {
            set.add(&format!("P{i}"), 0, 1).unwrap();
        }
        assert_eq!(set.add("", -1, 0).unwrap_err().kind(), ErrorKind::Capacity);
    }

    #[test]
    fn test_invalid_inputs_leave_set_unchanged() {
        let mut set = ProcessSet::new();
        assert_eq!(set.add("", 0, 1).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(set.add("A", 0, 0).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(set.add("A", -1, 2).unwrap_err().kind(), ErrorKind::Validation);
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_names_accepted() {
        let mut set = ProcessSet::new();
        set.add("A", 0, 1).unwrap();
        set.add("A", 1, 1).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut set = ProcessSet::new();
        set.add("A", 0, 1).unwrap();
        set.clear();
        assert!(set.is_empty());
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_snapshot_resets_remaining() {
        let mut set = ProcessSet::new();
        set.add("A", 0, 3).unwrap();

        let mut work = set.snapshot();
        work[0].execute(3);
        assert!(work[0].is_complete());

        assert_eq!(set.snapshot()[0].remaining, 3);
        assert_eq!(set.get("A").unwrap().remaining, 3);
    }

    #[test]
    fn test_from_specs_stops_at_first_error() {
        let specs = vec![
            ProcessSpec::new("A", 0, 1),
            ProcessSpec::new("B", 0, -1),
            ProcessSpec::new("C", 0, 1),
        ];
        let err = ProcessSet::from_specs(&specs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
