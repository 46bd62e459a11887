//! Simulation outcome model.
//!
//! An outcome is the complete result of one engine run: a derived record
//! per process, the CPU timeline, and the aggregate idle time and
//! utilization.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::policy::Policy;

/// Derived timing for one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: u32,
    /// Arrival time (copied from the descriptor).
    pub arrival_time: i64,
    /// Burst time (copied from the descriptor).
    pub burst_time: i64,
    /// Time the process first received the CPU.
    pub first_run_time: i64,
    /// Time the last unit of work completed.
    pub finish_time: i64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessResult {
    /// Derives turnaround and waiting time for a finished process.
    pub fn new(process: &Process, first_run_time: i64, finish_time: i64) -> Self {
        let turnaround_time = finish_time - process.arrival_time;
        Self {
            pid: process.pid,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            first_run_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// Delay between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.first_run_time - self.arrival_time
    }
}

/// A maximal interval during which the CPU ran one process or idled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process, or `None` while idle.
    pub pid: Option<u32>,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// A slice in which `pid` holds the CPU.
    pub fn busy(pid: u32, start: i64, end: i64) -> Self {
        Self {
            pid: Some(pid),
            start,
            end,
        }
    }

    /// A slice in which no process is ready.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            pid: None,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the CPU was idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// The result of simulating one policy over one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Per-process results, in input order.
    pub results: Vec<ProcessResult>,
    /// CPU timeline covering `[0, makespan)`.
    pub timeline: Vec<Slice>,
    /// Time at which the last process finished.
    pub makespan: i64,
    /// Total time the CPU spent idle.
    pub idle_time: i64,
    /// Busy share of the makespan, as a percentage (0.0..=100.0).
    pub cpu_utilization: f64,
}

impl SimulationOutcome {
    /// Finds the result for a given pid.
    pub fn result_for(&self, pid: u32) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Total time the CPU was running some process.
    pub fn busy_time(&self) -> i64 {
        self.timeline
            .iter()
            .filter(|s| !s.is_idle())
            .map(Slice::duration)
            .sum()
    }

    /// Sum of burst times over all processes.
    pub fn total_burst(&self) -> i64 {
        self.results.iter().map(|r| r.burst_time).sum()
    }

    /// Number of processes simulated.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Slices in which `pid` held the CPU.
    pub fn slices_for(&self, pid: u32) -> Vec<&Slice> {
        self.timeline
            .iter()
            .filter(|s| s.pid == Some(pid))
            .collect()
    }
}

/// CPU utilization as a percentage of the makespan.
///
/// Returns `0.0` if `makespan` is zero (empty workload).
pub fn utilization_percent(makespan: i64, idle_time: i64) -> f64 {
    if makespan <= 0 {
        return 0.0;
    }
    (makespan - idle_time) as f64 / makespan as f64 * 100.0
}
