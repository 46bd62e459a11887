//! Error type for simulation requests.
//!
//! The engines themselves are total over well-formed input. Every failure
//! is detected up front: an unknown policy selector, a bad parameter
//! (quantum, generator range), or descriptors rejected by
//! [`validate_processes`](crate::validation::validate_processes).

use std::fmt;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Reasons a simulation request is refused.
///
/// All variants are recoverable: the caller reports the problem and no
/// scheduling takes place.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The policy selector is not one of FCFS, SRT or RR.
    InvalidPolicy(String),
    /// A numeric parameter is out of range (e.g. a quantum ≤ 0).
    InvalidParameter(String),
    /// One or more process descriptors are malformed.
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// Shorthand for [`SimulationError::InvalidParameter`].
    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolicy(selector) => write!(f, "invalid policy: '{selector}'"),
            Self::InvalidParameter(message) => write!(f, "invalid parameter: {message}"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid input ({} problem", errors.len())?;
                if errors.len() != 1 {
                    write!(f, "s")?;
                }
                write!(f, ")")?;
                for e in errors {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
