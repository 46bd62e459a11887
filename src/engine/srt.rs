//! Shortest-Remaining-Time engine.
//!
//! # Algorithm
//!
//! Preemption is checked every time unit:
//! 1. Among processes that have arrived and still have work, pick the one
//!    with the least remaining time. Ties go to the lowest input index.
//! 2. If none is eligible, the CPU idles until the next arrival.
//! 3. Otherwise the chosen process runs.
//!
//! Between arrivals only the running process's remaining time changes, and
//! it only shrinks, so the choice cannot change before the next arrival or
//! completion. Each dispatch therefore runs up to that event, which yields
//! the same schedule as re-selecting every unit.
//!
//! # Complexity
//! O(n · (n + arrivals)) selections, independent of burst lengths.

use super::state::RunState;
use super::SchedulingEngine;
use crate::error::Result;
use crate::models::{Process, SimulationOutcome};
use crate::policy::Policy;
use crate::validation::validate_processes;

/// Preemptive Shortest-Remaining-Time (SJF with preemption).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl Srt {
    /// Index of the eligible process with the least remaining time.
    ///
    /// `min_by_key` keeps the first of equal minima, so the lowest index
    /// wins ties.
    fn select(state: &RunState<'_>) -> Option<usize> {
        (0..state.len())
            .filter(|&i| state.is_ready(i))
            .min_by_key(|&i| state.remaining(i))
    }

    /// Runs an already validated workload.
    pub(crate) fn dispatch(&self, processes: &[Process]) -> SimulationOutcome {
        let mut state = RunState::new(processes);
        let mut last: Option<usize> = None;

        while !state.all_finished() {
            let chosen = Self::select(&state);
            if chosen != last {
                match chosen {
                    Some(idx) => log::debug!(
                        "[SRT] t={}: dispatch P{} (remaining {})",
                        state.current_time(),
                        processes[idx].pid,
                        state.remaining(idx)
                    ),
                    None => log::debug!("[SRT] t={}: idle", state.current_time()),
                }
            }

            match chosen {
                Some(idx) => {
                    let now = state.current_time();
                    let units = match state.next_arrival() {
                        Some(next) => state.remaining(idx).min(next - now),
                        None => state.remaining(idx),
                    };
                    log::trace!("[SRT] t={now}: run P{} for {units}", processes[idx].pid);
                    state.run(idx, units);
                }
                None => {
                    let Some(next) = state.next_arrival() else {
                        break;
                    };
                    state.idle_for(next - state.current_time());
                }
            }
            last = chosen;
        }

        state.into_outcome(self.policy())
    }
}

impl SchedulingEngine for Srt {
    fn policy(&self) -> Policy {
        Policy::Srt
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        validate_processes(processes)?;
        Ok(self.dispatch(processes))
    }
}
