//! Discrete-time CPU scheduling simulator.
//!
//! Models a single processor shared by a fixed set of processes under
//! three classical dispatch policies, and derives per-process finish,
//! waiting and turnaround times plus CPU utilization.
//!
//! # Modules
//!
//! - **`models`**: `Process` descriptors and the `SimulationOutcome` they produce
//! - **`policy`**: `Policy` selector (FCFS, SRT, RR with quantum) and its parsing
//! - **`engine`**: the FCFS, SRT and Round-Robin engines
//! - **`scheduler`**: `Simulator` entry point, policy comparison, metrics
//! - **`validation`**: input integrity checks
//! - **`report`**: plain-text results table
//! - **`workload`**: seeded random workloads
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{Policy, Process, Simulator};
//!
//! let procs = Process::batch(&[(0, 5), (2, 3)]);
//! let outcome = Simulator::new(Policy::Fcfs).run(&procs)?;
//!
//! assert_eq!(outcome.result_for(2).unwrap().waiting_time, 3);
//! assert_eq!(format!("{:.0}", outcome.cpu_utilization), "100");
//! println!("{}", outcome.report());
//! # Ok::<(), cpu_sched_sim::SimulationError>(())
//! ```
//!
//! # Logging
//!
//! Dispatch decisions are emitted through the `log` facade (`debug` for
//! dispatches and completions, `trace` for SRT run steps and process state
//! transitions, `info` for run summaries). The crate never installs a logger.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod engine;
mod error;
pub mod models;
pub mod policy;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
pub use models::{Process, ProcessResult, SimulationOutcome};
pub use policy::Policy;
pub use scheduler::Simulator;
