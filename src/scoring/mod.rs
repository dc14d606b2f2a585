//! Score engine mapping an applicant profile to a bounded NPL rate

mod breakdown;
mod engine;

pub use breakdown::{ScoreBreakdown, ScoreComponent, ScoreFactor};
pub use engine::ScoreEngine;

use crate::assumptions::{DEFAULT_RATE_CEILING, DEFAULT_RATE_FLOOR};
use crate::error::{Result, ScoringError};
use crate::profile::ApplicantProfile;
use serde::Serialize;
use std::fmt;

/// Predicted probability that the loan becomes non-performing
///
/// Always within [0.01, 0.95], so it is never 0 or 1. The engine clamps to
/// the table's floor and ceiling, which validation keeps inside that range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NplRate(f64);

impl NplRate {
    /// Wrap an externally computed probability
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (DEFAULT_RATE_FLOOR..=DEFAULT_RATE_CEILING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoringError::InvalidRate(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for NplRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}

/// Score a profile against the default rule table
pub fn compute_npl_rate(profile: &ApplicantProfile) -> Result<NplRate> {
    ScoreEngine::default().score(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_bounds() {
        assert!(NplRate::new(0.01).is_ok());
        assert!(NplRate::new(0.95).is_ok());
        assert!(NplRate::new(0.0).is_err());
        assert!(NplRate::new(1.0).is_err());
        assert!(NplRate::new(0.005).is_err());
        assert!(NplRate::new(0.96).is_err());
        assert!(NplRate::new(-0.01).is_err());
        assert!(NplRate::new(1.5).is_err());
        assert!(NplRate::new(f64::NAN).is_err());
    }

    #[test]
    fn test_display_as_percent() {
        let rate = NplRate::new(0.1725).expect("in range");
        assert_eq!(rate.to_string(), "17.25%");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let profile = ApplicantProfile::default();
        let first = compute_npl_rate(&profile).expect("valid");
        let second = compute_npl_rate(&profile).expect("valid");
        assert_eq!(first, second);
    }
}
