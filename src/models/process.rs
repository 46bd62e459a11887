//! Process (job) descriptor.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! The descriptor is immutable input: engines keep remaining work in their
//! own state, so the same slice of processes can be simulated under
//! several policies.

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// # Time Representation
/// All times are integer time units relative to the simulation start (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique, positive process identifier.
    pub pid: u32,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }

    /// Builds processes from `(arrival, burst)` pairs, numbering them
    /// `1..=n` in the given order.
    pub fn batch(specs: &[(i64, i64)]) -> Vec<Self> {
        specs
            .iter()
            .zip(1u32..)
            .map(|(&(arrival, burst), pid)| Self::new(pid, arrival, burst))
            .collect()
    }
}

/// Lifecycle of a process inside one simulation run.
///
/// `NotArrived → Ready → Running → {Ready | Finished}`. `Finished` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Arrival time not reached yet.
    NotArrived,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Holding the CPU.
    Running,
    /// All work done.
    Finished,
}

impl ProcessState {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        matches!(
            (self, next),
            (Self::NotArrived, Self::Ready)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Finished)
        )
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(self) -> bool {
        self == Self::Finished
    }
}
