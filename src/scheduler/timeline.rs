/*!
 * Timeline
 * Ordered execution intervals produced by one engine run
 */

use crate::core::types::{ProcessName, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous run of a single process on the CPU, `start < end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub process_name: ProcessName,
    pub start: Ticks,
    pub end: Ticks,
}

impl Interval {
    pub fn new(process_name: impl Into<ProcessName>, start: Ticks, end: Ticks) -> Self {
        debug_assert!(start < end, "interval must have positive length");
        Self {
            process_name: process_name.into(),
            start,
            end,
        }
    }

    #[inline(always)]
    pub fn duration(&self) -> Ticks {
        self.end.saturating_sub(self.start)
    }
}

/// Ordered sequence of intervals in non-decreasing start order
///
/// Idle time never appears as an interval; it is the absence of coverage
/// between consecutive entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interval as-is
    pub(crate) fn push(&mut self, name: &ProcessName, start: Ticks, end: Ticks) {
        debug_assert!(
            self.intervals.last().map_or(true, |last| last.start <= start),
            "intervals must be appended in start order"
        );
        self.intervals.push(Interval::new(name.clone(), start, end));
    }

    /// Append, extending the last interval when it belongs to the same
    /// process and ends exactly at `start`
    pub(crate) fn push_merged(&mut self, name: &ProcessName, start: Ticks, end: Ticks) {
        match self.intervals.last_mut() {
            Some(last) if last.process_name == *name && last.end == start => last.end = end,
            _ => self.push(name, start, end),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of all interval durations
    pub fn total_busy(&self) -> Ticks {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// CPU time granted to every interval carrying `name`
    pub fn busy_for(&self, name: &str) -> Ticks {
        self.for_process(name).map(Interval::duration).sum()
    }

    pub fn for_process<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Interval> + 'a {
        self.intervals
            .iter()
            .filter(move |i| i.process_name.as_str() == name)
    }

    /// End of the last interval, zero when empty
    pub fn makespan(&self) -> Ticks {
        self.intervals.last().map_or(0, |i| i.end)
    }

    /// Idle gaps as `(start, end)` pairs, including a leading gap before the
    /// first dispatch
    pub fn idle_gaps(&self) -> Vec<(Ticks, Ticks)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in &self.intervals {
            if interval.start > cursor {
                gaps.push((cursor, interval.start));
            }
            cursor = cursor.max(interval.end);
        }
        gaps
    }

    /// Number of adjacent intervals that hand the CPU to a different process
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_name != w[1].process_name)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Vec<Interval>> for Timeline {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}
