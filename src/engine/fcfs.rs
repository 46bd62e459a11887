//! First-Come-First-Served engine.

use super::state::RunState;
use super::SchedulingEngine;
use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::policy::Policy;
use crate::validation::validate_processes;

/// Non-preemptive First-Come-First-Served.
///
/// Runs each process to completion in **input order**. The input is not
/// sorted: if it is not already ordered by arrival, processes are served
/// in the order given. When the next process has not arrived yet, the
/// CPU idles until its arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Runs an already validated workload.
    pub(crate) fn dispatch(&self, processes: &[Process]) -> SimulationOutcome {
        let mut state = RunState::new(processes);

        for (idx, p) in processes.iter().enumerate() {
            let now = state.current_time();
            if now < p.arrival_time {
                log::debug!("[FCFS] t={now}: idle until P{} arrives at {}", p.pid, p.arrival_time);
                state.idle_for(p.arrival_time - now);
            }
            log::debug!("[FCFS] t={}: dispatch P{} for {}", state.current_time(), p.pid, p.burst_time);
            state.run(idx, p.burst_time);
        }

        state.into_outcome(self.policy())
    }
}

impl SchedulingEngine for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        validate_processes(processes)?;
        Ok(self.dispatch(processes))
    }
}
