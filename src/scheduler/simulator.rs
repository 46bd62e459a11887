//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the policy parameters and the process descriptors.
//! 2. Optionally reorder the workload by arrival time (stable).
//! 3. Run exactly one engine.
//! 4. Report results in the caller's input order.

use serde::{Deserialize, Serialize};

use crate::engine::engine_for;
use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::policy::Policy;
use crate::validation::validate_processes;

/// Input container for a simulation run.
///
/// Deserializable, so a run can be described in a config file:
///
/// ```json
/// {
///   "policy": { "kind": "rr", "quantum": 2 },
///   "processes": [
///     { "pid": 1, "arrival_time": 0, "burst_time": 5 },
///     { "pid": 2, "arrival_time": 2, "burst_time": 3 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to simulate.
    pub policy: Policy,
    /// Workload, in input order.
    pub processes: Vec<Process>,
    /// Serve by arrival time instead of input order.
    #[serde(default)]
    pub sort_by_arrival: bool,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(policy: Policy, processes: Vec<Process>) -> Self {
        Self {
            policy,
            processes,
            sort_by_arrival: false,
        }
    }

    /// Sets arrival-order dispatch.
    pub fn with_arrival_sort(mut self, enabled: bool) -> Self {
        self.sort_by_arrival = enabled;
        self
    }

    /// Runs the request.
    pub fn run(&self) -> Result<SimulationOutcome> {
        Simulator::new(self.policy)
            .with_arrival_sort(self.sort_by_arrival)
            .run(&self.processes)
    }
}

/// Runs one policy over a workload.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::scheduler::Simulator;
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::Policy;
///
/// let procs = Process::batch(&[(0, 8), (1, 4)]);
/// let outcome = Simulator::new(Policy::Srt).run(&procs).unwrap();
///
/// assert_eq!(outcome.result_for(2).unwrap().finish_time, 5);
/// assert_eq!(outcome.result_for(1).unwrap().finish_time, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
    sort_by_arrival: bool,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            sort_by_arrival: false,
        }
    }

    /// Serve processes by arrival time (ties in input order) instead of
    /// input order.
    ///
    /// Off by default. FCFS is the policy this matters for: without it,
    /// FCFS serves the list exactly as given. Results are still reported
    /// in input order.
    pub fn with_arrival_sort(mut self, enabled: bool) -> Self {
        self.sort_by_arrival = enabled;
        self
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Validates input and runs the configured engine.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        let engine = engine_for(self.policy)?;
        // Before sorting, so problems are reported in input order
        validate_processes(processes)?;

        let outcome = if self.sort_by_arrival {
            let mut order: Vec<usize> = (0..processes.len()).collect();
            order.sort_by_key(|&i| processes[i].arrival_time);
            let sorted: Vec<Process> = order.iter().map(|&i| processes[i]).collect();

            let mut outcome = engine.simulate(&sorted)?;
            let mut paired: Vec<_> = order.into_iter().zip(outcome.results).collect();
            paired.sort_by_key(|&(i, _)| i);
            outcome.results = paired.into_iter().map(|(_, r)| r).collect();
            outcome
        } else {
            engine.simulate(processes)?
        };

        log::info!(
            "{} simulated {} processes: makespan {}, idle {}, utilization {:.2}%",
            self.policy,
            outcome.process_count(),
            outcome.makespan,
            outcome.idle_time,
            outcome.cpu_utilization
        );
        Ok(outcome)
    }
}

/// Runs each policy over the same workload.
///
/// Outcomes are returned in the order of `policies`. Fails on the first
/// invalid policy or on invalid input.
pub fn compare_policies(
    processes: &[Process],
    policies: &[Policy],
) -> Result<Vec<SimulationOutcome>> {
    policies
        .iter()
        .map(|&policy| Simulator::new(policy).run(processes))
        .collect()
}
