//! Aggregate performance metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Time the last process finishes |
//! | CPU Utilization | Busy share of the makespan (%) |
//! | Avg / Max Waiting | Over `turnaround - burst` |
//! | Avg Turnaround | Over `finish - arrival` |
//! | Avg Response | Over `first dispatch - arrival` |
//! | Throughput | Processes completed per time unit |
//! | Context Switches | Dispatches that hand the CPU to a different process |

use serde::{Deserialize, Serialize};

use crate::models::SimulationOutcome;

/// Summary indicators for one simulation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of processes.
    pub process_count: usize,
    /// Time the last process finished.
    pub makespan: i64,
    /// Total idle time.
    pub idle_time: i64,
    /// CPU utilization (%).
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Processes per time unit.
    pub throughput: f64,
    /// CPU hand-overs between different processes (idle gaps ignored).
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from an outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let n = outcome.results.len();
        let mean = |sum: f64| if n == 0 { 0.0 } else { sum / n as f64 };

        // Summed as f64: per-process times fit i64 but their total may not
        let total_waiting: f64 = outcome.results.iter().map(|r| r.waiting_time as f64).sum();
        let total_turnaround: f64 = outcome.results.iter().map(|r| r.turnaround_time as f64).sum();
        let total_response: f64 = outcome.results.iter().map(|r| r.response_time() as f64).sum();
        let max_waiting_time = outcome
            .results
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        let throughput = if outcome.makespan > 0 {
            n as f64 / outcome.makespan as f64
        } else {
            0.0
        };

        let busy: Vec<u32> = outcome.timeline.iter().filter_map(|s| s.pid).collect();
        let context_switches = busy.windows(2).filter(|w| w[0] != w[1]).count();

        Self {
            process_count: n,
            makespan: outcome.makespan,
            idle_time: outcome.idle_time,
            cpu_utilization: outcome.cpu_utilization,
            avg_waiting_time: mean(total_waiting),
            max_waiting_time,
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            throughput,
            context_switches,
        }
    }
}
