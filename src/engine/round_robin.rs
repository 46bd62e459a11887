//! Round-Robin engine.
//!
//! # Algorithm
//!
//! A FIFO ready queue of process indices:
//! 1. Enqueue every process arriving at t=0, in input order.
//! 2. While the queue is non-empty or work remains:
//!    - Empty queue: idle until the next arrival, then enqueue the
//!      processes arriving at that time.
//!    - Otherwise pop the front process and run it for
//!      `min(quantum, remaining)`.
//!    - Enqueue, in input order, every process whose arrival falls in
//!      `(slice_start, slice_end]`.
//!    - Re-enqueue the preempted process at the tail if it has work left.
//!
//! # Arrival-before-requeue rule
//! Processes that arrive during a slice (or exactly at its end) join the
//! queue **ahead of** the process whose quantum just expired.

use std::collections::VecDeque;

use super::state::RunState;
use super::SchedulingEngine;
use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::policy::Policy;
use crate::validation::validate_processes;

/// Preemptive Round-Robin with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates an engine with the given quantum.
    ///
    /// Fails with [`SimulationError::InvalidParameter`](crate::SimulationError::InvalidParameter)
    /// if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        Policy::round_robin(quantum)?;
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Appends, in input order, every process whose arrival lies in
    /// `(after, until]`.
    fn admit_arrivals(
        state: &RunState<'_>,
        queue: &mut VecDeque<usize>,
        after: i64,
        until: i64,
    ) {
        for idx in 0..state.len() {
            let arrival = state.arrival(idx);
            if arrival > after && arrival <= until {
                queue.push_back(idx);
            }
        }
    }

    /// Runs an already validated workload.
    pub(crate) fn dispatch(&self, processes: &[Process]) -> SimulationOutcome {
        let mut state = RunState::new(processes);
        let mut ready: VecDeque<usize> = (0..state.len())
            .filter(|&i| state.arrival(i) == 0)
            .collect();

        while !ready.is_empty() || !state.all_finished() {
            let Some(idx) = ready.pop_front() else {
                let before = state.current_time();
                let Some(next) = state.next_arrival() else {
                    break;
                };
                log::debug!("[RR] t={before}: idle until {next}");
                state.idle_for(next - before);
                Self::admit_arrivals(&state, &mut ready, before, state.current_time());
                continue;
            };

            let start = state.current_time();
            let slice = self.quantum.min(state.remaining(idx));
            log::debug!(
                "[RR] t={start}: dispatch P{} for {slice} (remaining {})",
                processes[idx].pid,
                state.remaining(idx)
            );
            let finished = state.run(idx, slice);

            // Arrival-before-requeue: newcomers first, then the preempted process
            Self::admit_arrivals(&state, &mut ready, start, state.current_time());
            if !finished {
                ready.push_back(idx);
            }
        }

        state.into_outcome(self.policy())
    }
}

impl SchedulingEngine for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::Rr {
            quantum: self.quantum,
        }
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        validate_processes(processes)?;
        Ok(self.dispatch(processes))
    }
}
