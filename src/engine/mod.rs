//! Scheduling engines.
//!
//! One engine per policy, all driven through the [`SchedulingEngine`]
//! trait. Engines are stateless between invocations: each call builds a
//! fresh run state from the (immutable) process slice and returns a
//! [`SimulationOutcome`].
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::engine::{RoundRobin, SchedulingEngine};
//! use cpu_sched_sim::models::Process;
//!
//! let procs = Process::batch(&[(0, 5)]);
//! let outcome = RoundRobin::new(2)?.simulate(&procs)?;
//! assert_eq!(outcome.result_for(1).unwrap().finish_time, 5);
//! # Ok::<(), cpu_sched_sim::SimulationError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod srt;
mod state;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use srt::Srt;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::policy::Policy;

/// A single-CPU dispatch algorithm.
///
/// Input is always checked with
/// [`validate_processes`](crate::validation::validate_processes) before the
/// engine runs; the unchecked dispatch loops stay private to the crate.
pub trait SchedulingEngine: Send + Sync + Debug {
    /// The policy this engine implements.
    fn policy(&self) -> Policy;

    /// Validates the workload, then simulates it.
    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome>;
}

/// Builds the engine for a policy.
///
/// Fails if the policy parameters are invalid (e.g. quantum ≤ 0).
pub fn engine_for(policy: Policy) -> Result<Box<dyn SchedulingEngine>> {
    policy.validate()?;
    Ok(match policy {
        Policy::Fcfs => Box::new(Fcfs),
        Policy::Srt => Box::new(Srt),
        Policy::Rr { quantum } => Box::new(RoundRobin::new(quantum)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Srt,
            Policy::Rr { quantum: 1 },
            Policy::Rr { quantum: 3 },
        ]
    }

    fn workloads() -> Vec<Vec<Process>> {
        vec![
            Process::batch(&[(0, 5), (2, 3)]),
            Process::batch(&[(0, 8), (1, 4), (2, 9), (3, 5)]),
            Process::batch(&[(3, 2), (3, 1), (10, 4)]),
            Process::batch(&[(0, 1), (0, 1), (0, 1)]),
            Process::batch(&[(7, 3)]),
        ]
    }

    #[test]
    fn test_engine_for_matches_policy() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            assert_eq!(engine.policy(), policy);
        }
    }

    #[test]
    fn test_engine_for_rejects_bad_quantum() {
        assert!(matches!(
            engine_for(Policy::Rr { quantum: 0 }),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_simulate_validates() {
        let procs = vec![Process::new(1, 0, 0)];
        assert!(matches!(
            Srt.simulate(&procs),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_input_rejected_by_every_engine() {
        let malformed = [
            vec![Process::new(1, 0, 0)],
            vec![Process::new(1, 0, 3), Process::new(2, 1, 0)],
            vec![Process::new(1, -4, 2)],
        ];
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in &malformed {
                assert!(
                    matches!(engine.simulate(procs), Err(SimulationError::InvalidInput(_))),
                    "{policy} {procs:?}"
                );
            }
        }
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let overflowing = [
            vec![Process::new(1, i64::MAX, 1)],
            Process::batch(&[(0, i64::MAX), (0, 1)]),
        ];
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in &overflowing {
                assert!(
                    matches!(engine.simulate(procs), Err(SimulationError::InvalidInput(_))),
                    "{policy} {procs:?}"
                );
            }
        }
    }

    #[test]
    fn test_far_arrival_skips_idle_stretch() {
        // Largest horizon that still fits: idle until i64::MAX - 1, run one unit
        let procs = vec![Process::new(1, i64::MAX - 1, 1)];
        for policy in all_policies() {
            let o = engine_for(policy).unwrap().simulate(&procs).unwrap();
            assert_eq!(o.makespan, i64::MAX, "{policy}");
            assert_eq!(o.idle_time, i64::MAX - 1);
            assert_eq!(o.result_for(1).unwrap().waiting_time, 0);
            assert_eq!(o.timeline.len(), 2);
        }
    }

    #[test]
    fn test_conservation_all_engines() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in workloads() {
                let o = engine.simulate(&procs).unwrap();
                let total_burst: i64 = procs.iter().map(|p| p.burst_time).sum();
                assert_eq!(o.idle_time + total_burst, o.makespan, "{policy} {procs:?}");
                assert_eq!(o.busy_time(), total_burst, "{policy} {procs:?}");
            }
        }
    }

    #[test]
    fn test_derivations_and_non_negativity() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in workloads() {
                let o = engine.simulate(&procs).unwrap();
                assert_eq!(o.results.len(), procs.len());
                for (r, p) in o.results.iter().zip(&procs) {
                    assert_eq!(r.pid, p.pid);
                    assert_eq!(r.turnaround_time, r.finish_time - r.arrival_time);
                    assert_eq!(r.waiting_time, r.turnaround_time - r.burst_time);
                    assert!(r.waiting_time >= 0, "{policy} P{}", r.pid);
                    assert!(r.turnaround_time >= r.burst_time);
                    assert!(r.first_run_time >= r.arrival_time);
                    assert!(r.first_run_time < r.finish_time);
                }
            }
        }
    }

    #[test]
    fn test_timeline_covers_makespan() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in workloads() {
                let o = engine.simulate(&procs).unwrap();
                let mut t = 0;
                for s in &o.timeline {
                    assert_eq!(s.start, t);
                    assert!(s.end > s.start);
                    t = s.end;
                }
                assert_eq!(t, o.makespan);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in workloads() {
                assert_eq!(engine.simulate(&procs).unwrap(), engine.simulate(&procs).unwrap());
            }
        }
    }

    #[test]
    fn test_utilization_bounds() {
        for policy in all_policies() {
            let engine = engine_for(policy).unwrap();
            for procs in workloads() {
                let o = engine.simulate(&procs).unwrap();
                assert!(o.cpu_utilization > 0.0 && o.cpu_utilization <= 100.0);
            }
        }
    }
}
