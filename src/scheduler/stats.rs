/*!
 * Timeline Statistics
 * Per-process and aggregate metrics derived from a finished timeline
 */

use super::timeline::Timeline;
use crate::core::types::{ProcessName, Ticks};
use crate::process::ProcessSet;
use serde::Serialize;

/// Metrics for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub name: ProcessName,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub first_start: Ticks,
    pub completion: Ticks,
    /// completion - arrival
    pub turnaround: Ticks,
    /// turnaround - burst
    pub waiting: Ticks,
    /// first_start - arrival
    pub response: Ticks,
}

/// Aggregate metrics for a whole run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineStats {
    pub processes: Vec<ProcessMetrics>,
    pub makespan: Ticks,
    pub busy: Ticks,
    pub idle: Ticks,
    pub cpu_utilization: f64,
    pub context_switches: usize,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

impl TimelineStats {
    /// Derive metrics for every process of `set` that appears in `timeline`
    ///
    /// Processes are matched by name, so sets with duplicate names yield
    /// merged figures for those names.
    pub fn from_timeline(set: &ProcessSet, timeline: &Timeline) -> Self {
        let processes: Vec<ProcessMetrics> = set
            .iter()
            .filter_map(|p| {
                let mut runs = timeline.for_process(p.name.as_str());
                let first = runs.next()?;
                let completion = runs.last().map_or(first.end, |i| i.end);
                let turnaround = completion.saturating_sub(p.arrival);
                Some(ProcessMetrics {
                    name: p.name.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    first_start: first.start,
                    completion,
                    turnaround,
                    waiting: turnaround.saturating_sub(p.burst),
                    response: first.start.saturating_sub(p.arrival),
                })
            })
            .collect();

        let makespan = timeline.makespan();
        let busy = timeline.total_busy();

        Self {
            makespan,
            busy,
            idle: makespan.saturating_sub(busy),
            cpu_utilization: ratio(busy, makespan),
            context_switches: timeline.context_switches(),
            avg_turnaround: mean(processes.iter().map(|m| m.turnaround)),
            avg_waiting: mean(processes.iter().map(|m| m.waiting)),
            avg_response: mean(processes.iter().map(|m| m.response)),
            processes,
        }
    }

    pub fn process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }
}

fn ratio(num: Ticks, den: Ticks) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn mean(values: impl Iterator<Item = Ticks>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + v, c + 1));
    ratio(sum, count)
}
