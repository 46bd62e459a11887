//! Simulation driver and outcome metrics.
//!
//! `Simulator` validates a request, runs exactly one engine and returns
//! the outcome; `compare_policies` runs several over one workload.
//! `ScheduleMetrics` summarizes an outcome (averages, throughput, context
//! switches).

mod metrics;
mod simulator;

pub use metrics::ScheduleMetrics;
pub use simulator::{compare_policies, SimulationRequest, Simulator};
