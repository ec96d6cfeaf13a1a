/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
///
/// Every fallible operation returns one of these as an explicit value; the
/// engine never yields a partial timeline alongside an error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(scheduler::validation),
        help("Names must be non-empty, bursts and quanta positive, arrivals non-negative.")
    )]
    Validation(InlineString),

    #[error("Process set full: current {current}, limit {limit}")]
    #[diagnostic(
        code(scheduler::capacity),
        help("Clear the process set before adding more processes.")
    )]
    Capacity { current: usize, limit: usize },

    #[error("No processes to schedule")]
    #[diagnostic(
        code(scheduler::empty_input),
        help("Add at least one process before running a policy.")
    )]
    EmptyInput,

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(scheduler::workload),
        help("Workloads are JSON arrays of records with name, arrival and burst fields.")
    )]
    Workload(InlineString),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(scheduler::configuration),
        help("Review SCHEDSIM_* environment variables or the config file.")
    )]
    Configuration(InlineString),
}

/// Coarse error classification for front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Capacity,
    EmptyInput,
    Workload,
    Configuration,
}

impl SchedulerError {
    pub fn validation(msg: impl Into<InlineString>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn workload(msg: impl Into<InlineString>) -> Self {
        Self::Workload(msg.into())
    }

    pub fn configuration(msg: impl Into<InlineString>) -> Self {
        Self::Configuration(msg.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Capacity { .. } => ErrorKind::Capacity,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::Workload(_) => ErrorKind::Workload,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Workload(err.to_string().into())
    }
}

impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        Self::Workload(err.to_string().into())
    }
}
