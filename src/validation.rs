//! Input validation for simulation workloads.
//!
//! Checks the process descriptors before any engine runs. Detects:
//! - Non-positive or duplicate pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose clock would pass `i64::MAX`
//!
//! A zero burst would never become eligible under SRT or RR, so the run
//! could not terminate; these checks are what make every engine total.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A pid of zero.
    InvalidPid,
    /// Two processes share the same pid.
    DuplicatePid,
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time of zero or less.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. Every pid is positive
/// 2. No duplicate pids
/// 3. Every arrival time is ≥ 0
/// 4. Every burst time is > 0
/// 5. `max(arrival) + Σ burst` fits in `i64` (bounds every clock value)
///
/// An empty workload is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                format!("Process at position {idx} has pid 0"),
            ));
        } else if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulation clock, `None` on overflow.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_time))
}
