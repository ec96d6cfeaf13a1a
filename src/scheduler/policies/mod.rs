/*!
 * Scheduling Policies
 * One `SchedulingAlgorithm` implementation per supported policy
 */

mod fcfs;
mod round_robin;
mod sjn;
mod srt;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjn::ShortestJobNext;
pub use srt::ShortestRemainingTime;
