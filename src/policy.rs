//! Scheduling policy selection.
//!
//! A [`Policy`] names one of the three engines and carries the round-robin
//! quantum. Selectors can be parsed from text (`"fcfs"`, `"srt"`,
//! `"rr:4"`) or from the classic numeric menu (1 = FCFS, 2 = RR,
//! 3 = SRT).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimulationError};

/// A CPU scheduling policy.
///
/// Serialized with an internal `kind` tag:
/// `{"kind":"fcfs"}`, `{"kind":"srt"}`, `{"kind":"rr","quantum":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Shortest-Remaining-Time, preemptive.
    Srt,
    /// Round-Robin with a fixed time quantum.
    Rr {
        /// Maximum contiguous slice per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Round-robin with the given quantum.
    ///
    /// Fails with [`SimulationError::InvalidParameter`] if `quantum <= 0`.
    pub fn round_robin(quantum: i64) -> Result<Self> {
        let policy = Self::Rr { quantum };
        policy.validate()?;
        Ok(policy)
    }

    /// Maps the numeric menu: 1 = FCFS, 2 = RR, 3 = SRT.
    ///
    /// The quantum is only consulted (and required) for RR.
    pub fn from_menu_choice(choice: u32, quantum: Option<i64>) -> Result<Self> {
        match choice {
            1 => Ok(Self::Fcfs),
            2 => {
                let q = quantum.ok_or_else(|| {
                    SimulationError::parameter("round-robin requires a time quantum")
                })?;
                Self::round_robin(q)
            }
            3 => Ok(Self::Srt),
            other => Err(SimulationError::InvalidPolicy(other.to_string())),
        }
    }

    /// Checks policy parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Rr { quantum } if quantum <= 0 => Err(SimulationError::parameter(format!(
                "quantum must be positive, got {quantum}"
            ))),
            _ => Ok(()),
        }
    }

    /// Short name (e.g. "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Srt => "SRT",
            Self::Rr { .. } => "RR",
        }
    }

    /// Full descriptive name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come, First-Served",
            Self::Srt => "Shortest Remaining Time",
            Self::Rr { .. } => "Round-Robin",
        }
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fcfs)
    }

    /// The RR quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match *self {
            Self::Rr { quantum } => Some(quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rr { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    /// Accepts `fcfs`, `srt`, `rr<q>`, `rr:<q>` (case-insensitive) and the
    /// menu digits `1` and `3`. A bare `rr` or `2` has no quantum and is
    /// rejected as an invalid parameter.
    fn from_str(s: &str) -> Result<Self> {
        let selector = s.trim().to_ascii_lowercase();
        match selector.as_str() {
            "fcfs" | "1" => return Ok(Self::Fcfs),
            "srt" | "3" => return Ok(Self::Srt),
            "rr" | "2" => {
                return Err(SimulationError::parameter(
                    "round-robin requires a time quantum",
                ))
            }
            _ => {}
        }

        if let Some(rest) = selector.strip_prefix("rr") {
            let digits = rest.strip_prefix(':').unwrap_or(rest);
            let quantum: i64 = digits.parse().map_err(|_| {
                SimulationError::parameter(format!("cannot parse quantum from '{}'", s.trim()))
            })?;
            return Self::round_robin(quantum);
        }

        Err(SimulationError::InvalidPolicy(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("fcfs".parse::<Policy>(), Ok(Policy::Fcfs));
        assert_eq!(" SRT ".parse::<Policy>(), Ok(Policy::Srt));
        assert_eq!("RR4".parse::<Policy>(), Ok(Policy::Rr { quantum: 4 }));
        assert_eq!("rr:2".parse::<Policy>(), Ok(Policy::Rr { quantum: 2 }));
    }

    #[test]
    fn test_parse_menu_digits() {
        assert_eq!("1".parse::<Policy>(), Ok(Policy::Fcfs));
        assert_eq!("3".parse::<Policy>(), Ok(Policy::Srt));
        assert!(matches!(
            "2".parse::<Policy>(),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_parse_unknown_is_invalid_policy() {
        assert_eq!(
            "lottery".parse::<Policy>(),
            Err(SimulationError::InvalidPolicy("lottery".into()))
        );
        assert!(matches!(
            "4".parse::<Policy>(),
            Err(SimulationError::InvalidPolicy(_))
        ));
        assert!(matches!(
            "".parse::<Policy>(),
            Err(SimulationError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_parse_bad_quantum() {
        assert!(matches!(
            "rr0".parse::<Policy>(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            "rr:-3".parse::<Policy>(),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(matches!(
            "rrx".parse::<Policy>(),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(Policy::from_menu_choice(1, None), Ok(Policy::Fcfs));
        assert_eq!(
            Policy::from_menu_choice(2, Some(3)),
            Ok(Policy::Rr { quantum: 3 })
        );
        assert_eq!(Policy::from_menu_choice(3, Some(99)), Ok(Policy::Srt));
        assert!(matches!(
            Policy::from_menu_choice(2, None),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert_eq!(
            Policy::from_menu_choice(7, None),
            Err(SimulationError::InvalidPolicy("7".into()))
        );
    }

    #[test]
    fn test_validate_quantum() {
        assert!(Policy::Rr { quantum: 1 }.validate().is_ok());
        assert!(Policy::Rr { quantum: 0 }.validate().is_err());
        assert!(Policy::round_robin(-1).is_err());
        assert!(Policy::Fcfs.validate().is_ok());
    }

    #[test]
    fn test_accessors() {
        let rr = Policy::Rr { quantum: 2 };
        assert_eq!(rr.name(), "RR");
        assert_eq!(rr.quantum(), Some(2));
        assert!(rr.is_preemptive());
        assert!(!Policy::Fcfs.is_preemptive());
        assert_eq!(Policy::Srt.quantum(), None);
        assert_eq!(rr.to_string(), "RR(q=2)");
        assert_eq!(Policy::Srt.to_string(), "SRT");
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Policy::Rr { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"rr","quantum":2}"#);
        let back: Policy = serde_json::from_str(r#"{"kind":"fcfs"}"#).unwrap();
        assert_eq!(back, Policy::Fcfs);
    }
}
