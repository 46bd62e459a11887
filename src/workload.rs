//! Seeded random workload generation.
//!
//! Produces reproducible process sets for experiments and policy
//! comparisons. The engines themselves are deterministic; randomness
//! lives only here, behind an explicit seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Random workload generator.
///
/// Arrival and burst times are drawn uniformly from inclusive ranges.
/// Generated processes are ordered by arrival and numbered `1..=n` in
/// that order, so FCFS input order matches arrival order.
///
/// # Example
/// ```
/// use cpu_sched_sim::workload::WorkloadGenerator;
///
/// let procs = WorkloadGenerator::new(42)
///     .with_count(5)
///     .with_burst_range(1, 10)
///     .generate()
///     .unwrap();
/// assert_eq!(procs.len(), 5);
/// assert!(procs.windows(2).all(|w| w[0].arrival_time <= w[1].arrival_time));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// RNG seed.
    pub seed: u64,
    /// Number of processes.
    pub count: usize,
    /// Inclusive arrival range.
    pub arrival_range: (i64, i64),
    /// Inclusive burst range.
    pub burst_range: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator with defaults: 8 processes, arrivals in
    /// `0..=20`, bursts in `1..=10`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 8,
            arrival_range: (0, 20),
            burst_range: (1, 10),
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Checks the ranges.
    pub fn validate(&self) -> Result<()> {
        let (a_min, a_max) = self.arrival_range;
        let (b_min, b_max) = self.burst_range;
        if a_min < 0 || a_min > a_max {
            return Err(SimulationError::parameter(format!(
                "arrival range must satisfy 0 <= min <= max, got {a_min}..={a_max}"
            )));
        }
        if b_min < 1 || b_min > b_max {
            return Err(SimulationError::parameter(format!(
                "burst range must satisfy 1 <= min <= max, got {b_min}..={b_max}"
            )));
        }
        if u32::try_from(self.count).is_err() {
            return Err(SimulationError::parameter(format!(
                "too many processes: {}",
                self.count
            )));
        }
        Ok(())
    }

    /// Generates the workload.
    pub fn generate(&self) -> Result<Vec<Process>> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (a_min, a_max) = self.arrival_range;
        let (b_min, b_max) = self.burst_range;

        let mut specs: Vec<(i64, i64)> = (0..self.count)
            .map(|_| {
                let arrival = rng.random_range(a_min..=a_max);
                let burst = rng.random_range(b_min..=b_max);
                (arrival, burst)
            })
            .collect();
        specs.sort_by_key(|&(arrival, _)| arrival);

        log::debug!(
            "generated {} processes (seed {}, arrivals {}..={}, bursts {}..={})",
            self.count,
            self.seed,
            a_min,
            a_max,
            b_min,
            b_max
        );
        Ok(Process::batch(&specs))
    }
}
