//! Simulation domain models.
//!
//! Input descriptors and the structured output of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input: pid, arrival, burst |
//! | `ProcessState` | Per-process lifecycle inside a run |
//! | `ProcessResult` | Derived finish, waiting, turnaround, response |
//! | `Slice` | One contiguous stretch of the CPU timeline |
//! | `SimulationOutcome` | Everything one engine run produces |

mod outcome;
mod process;

pub use outcome::{utilization_percent, ProcessResult, SimulationOutcome, Slice};
pub use process::{Process, ProcessState};
