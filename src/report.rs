//! Plain-text rendering of a simulation outcome.
//!
//! Produces the classic tab-separated results table:
//!
//! ```text
//! First-Come, First-Served (FCFS) Scheduling:
//! Process	Arrival	Burst	Finish	Waiting	Turnaround
//! P1	0	5	5	0	5
//! P2	2	3	8	3	6
//! CPU Utilization: 100.00%
//! ```
//!
//! Rendering is optional; the engines never print.

use std::fmt;

use crate::models::{SimulationOutcome, Slice};
use crate::policy::Policy;

/// Displayable report over an outcome.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    outcome: &'a SimulationOutcome,
    show_timeline: bool,
}

impl<'a> Report<'a> {
    /// Creates a table-only report.
    pub fn new(outcome: &'a SimulationOutcome) -> Self {
        Self {
            outcome,
            show_timeline: false,
        }
    }

    /// Appends a Gantt-style timeline line after the table.
    pub fn with_timeline(mut self) -> Self {
        self.show_timeline = true;
        self
    }
}

/// Report heading for a policy.
pub fn heading(policy: &Policy) -> String {
    match policy {
        Policy::Rr { quantum } => {
            format!("{} ({}) Scheduling (Q = {quantum}):", policy.description(), policy.name())
        }
        _ => format!("{} ({}) Scheduling:", policy.description(), policy.name()),
    }
}

fn write_slice(f: &mut fmt::Formatter<'_>, slice: &Slice) -> fmt::Result {
    match slice.pid {
        Some(pid) => write!(f, " P{pid} {}-{} |", slice.start, slice.end),
        None => write!(f, " idle {}-{} |", slice.start, slice.end),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", heading(&self.outcome.policy))?;
        writeln!(f, "Process\tArrival\tBurst\tFinish\tWaiting\tTurnaround")?;
        for r in &self.outcome.results {
            writeln!(
                f,
                "P{}\t{}\t{}\t{}\t{}\t{}",
                r.pid, r.arrival_time, r.burst_time, r.finish_time, r.waiting_time, r.turnaround_time
            )?;
        }
        writeln!(f, "CPU Utilization: {:.2}%", self.outcome.cpu_utilization)?;

        if self.show_timeline {
            write!(f, "Timeline: |")?;
            for slice in &self.outcome.timeline {
                write_slice(f, slice)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl SimulationOutcome {
    /// Table report for this outcome.
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}
