//! Bookkeeping shared by the engines.

use crate::models::{
    utilization_percent, Process, ProcessResult, ProcessState, SimulationOutcome, Slice,
};
use crate::policy::Policy;

/// Mutable state of one simulation run.
///
/// Holds the simulation clock, per-process remaining work and the CPU
/// timeline. Engines only decide *what* runs next; every time advance
/// goes through [`run`](Self::run) or [`idle_for`](Self::idle_for), which
/// keep remaining work non-negative and stamp each finish exactly once.
#[derive(Debug)]
pub(crate) struct RunState<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    first_run: Vec<Option<i64>>,
    finish: Vec<Option<i64>>,
    timeline: Vec<Slice>,
    current_time: i64,
    idle_time: i64,
    completed: usize,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            first_run: vec![None; processes.len()],
            finish: vec![None; processes.len()],
            timeline: Vec::new(),
            current_time: 0,
            idle_time: 0,
            completed: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.processes.len()
    }

    pub(crate) fn current_time(&self) -> i64 {
        self.current_time
    }

    pub(crate) fn arrival(&self, idx: usize) -> i64 {
        self.processes[idx].arrival_time
    }

    pub(crate) fn remaining(&self, idx: usize) -> i64 {
        self.remaining[idx]
    }

    pub(crate) fn all_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Arrived by now and not yet finished.
    pub(crate) fn is_ready(&self, idx: usize) -> bool {
        self.arrival(idx) <= self.current_time && self.remaining[idx] > 0
    }

    /// Earliest arrival still in the future, if any unfinished process has one.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        (0..self.len())
            .filter(|&i| self.remaining[i] > 0 && self.arrival(i) > self.current_time)
            .map(|i| self.arrival(i))
            .min()
    }

    /// Lifecycle position of process `idx` between dispatches.
    pub(crate) fn state_of(&self, idx: usize) -> ProcessState {
        if self.remaining[idx] == 0 {
            ProcessState::Finished
        } else if self.arrival(idx) > self.current_time {
            ProcessState::NotArrived
        } else {
            ProcessState::Ready
        }
    }

    /// Leaves the CPU idle for `units` time units.
    pub(crate) fn idle_for(&mut self, units: i64) {
        if units <= 0 {
            return;
        }
        let start = self.current_time;
        self.current_time += units;
        self.idle_time += units;
        self.push_slice(Slice::idle(start, self.current_time));
    }

    /// Runs process `idx` for `units` time units.
    ///
    /// `units` is clamped to the remaining work. Returns `true` if the
    /// process finished during this slice.
    pub(crate) fn run(&mut self, idx: usize, units: i64) -> bool {
        let units = units.min(self.remaining[idx]);
        if units <= 0 {
            return false;
        }
        let pid = self.processes[idx].pid;
        let start = self.current_time;
        let before = self.state_of(idx);
        debug_assert!(
            before.can_transition_to(ProcessState::Running),
            "P{pid} dispatched while {before:?}"
        );
        log::trace!("t={start}: P{pid} {before:?} -> Running");

        if self.first_run[idx].is_none() {
            self.first_run[idx] = Some(start);
        }
        self.remaining[idx] -= units;
        self.current_time += units;
        self.push_slice(Slice::busy(pid, start, self.current_time));

        let after = self.state_of(idx);
        log::trace!("t={}: P{pid} Running -> {after:?}", self.current_time);
        if after.is_terminal() {
            self.finish[idx] = Some(self.current_time);
            self.completed += 1;
            log::debug!("t={}: P{} finished", self.current_time, pid);
            true
        } else {
            false
        }
    }

    /// Appends a slice, merging it into the previous one when contiguous
    /// and owned by the same pid (or both idle).
    fn push_slice(&mut self, slice: Slice) {
        if let Some(last) = self.timeline.last_mut() {
            if last.pid == slice.pid && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.timeline.push(slice);
    }

    /// Consumes the state into an outcome.
    pub(crate) fn into_outcome(self, policy: Policy) -> SimulationOutcome {
        debug_assert!(self.all_finished(), "outcome requested before all processes finished");

        let results = self
            .processes
            .iter()
            .zip(self.first_run.iter().zip(&self.finish))
            .map(|(p, (first, finish))| {
                let finish_time = finish.unwrap_or(self.current_time);
                ProcessResult::new(p, first.unwrap_or(finish_time), finish_time)
            })
            .collect();

        SimulationOutcome {
            policy,
            results,
            timeline: self.timeline,
            makespan: self.current_time,
            idle_time: self.idle_time,
            cpu_utilization: utilization_percent(self.current_time, self.idle_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_and_finish() {
        let procs = Process::batch(&[(0, 3)]);
        let mut state = RunState::new(&procs);

        assert!(!state.run(0, 2));
        assert_eq!(state.remaining(0), 1);
        assert!(state.run(0, 5)); // clamped to 1
        assert_eq!(state.current_time(), 3);
        assert!(state.all_finished());

        let outcome = state.into_outcome(Policy::Fcfs);
        assert_eq!(outcome.results[0].finish_time, 3);
        assert_eq!(outcome.timeline, vec![Slice::busy(1, 0, 3)]);
    }

    #[test]
    fn test_run_finished_process_is_noop() {
        let procs = Process::batch(&[(0, 1)]);
        let mut state = RunState::new(&procs);
        assert!(state.run(0, 1));
        assert!(!state.run(0, 1));
        assert_eq!(state.current_time(), 1);
    }

    #[test]
    fn test_idle_slices_merge() {
        let procs = Process::batch(&[(3, 1)]);
        let mut state = RunState::new(&procs);
        state.idle_for(1);
        state.idle_for(2);
        assert_eq!(state.current_time(), 3);
        assert!(state.is_ready(0));
        state.run(0, 1);

        let outcome = state.into_outcome(Policy::Srt);
        assert_eq!(outcome.timeline, vec![Slice::idle(0, 3), Slice::busy(1, 3, 4)]);
        assert_eq!(outcome.idle_time, 3);
        assert!((outcome.cpu_utilization - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_run_recorded_once() {
        let procs = Process::batch(&[(0, 2), (0, 1)]);
        let mut state = RunState::new(&procs);
        state.run(0, 1);
        state.run(1, 1);
        state.run(0, 1);

        let outcome = state.into_outcome(Policy::Rr { quantum: 1 });
        assert_eq!(outcome.results[0].first_run_time, 0);
        assert_eq!(outcome.results[1].first_run_time, 1);
        assert_eq!(outcome.results[0].finish_time, 3);
    }

    #[test]
    fn test_state_of() {
        let procs = Process::batch(&[(0, 1), (2, 1)]);
        let mut state = RunState::new(&procs);
        assert_eq!(state.state_of(0), ProcessState::Ready);
        assert_eq!(state.state_of(1), ProcessState::NotArrived);
        state.run(0, 1);
        assert_eq!(state.state_of(0), ProcessState::Finished);
        state.idle_for(1);
        assert_eq!(state.state_of(1), ProcessState::Ready);
    }

    #[test]
    fn test_next_arrival() {
        let procs = Process::batch(&[(0, 1), (9, 1), (4, 2)]);
        let mut state = RunState::new(&procs);
        assert_eq!(state.next_arrival(), Some(4));
        state.run(0, 1);
        state.idle_for(3);
        assert_eq!(state.next_arrival(), Some(9));
        state.run(2, 2);
        state.idle_for(3);
        assert_eq!(state.next_arrival(), None);
    }

    #[test]
    fn test_empty_state() {
        let state = RunState::new(&[]);
        assert!(state.all_finished());
        let outcome = state.into_outcome(Policy::Fcfs);
        assert_eq!(outcome.makespan, 0);
        assert!((outcome.cpu_utilization - 0.0).abs() < 1e-10);
    }
}
