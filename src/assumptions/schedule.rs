//! Threshold schedules mapping a measured quantity to a risk increment

use serde::{Deserialize, Serialize};

/// Comparison a band applies to the measured value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cutoff {
    /// value < limit
    Below(f64),
    /// value > limit
    Above(f64),
    /// value >= limit
    AtOrAbove(f64),
}

impl Cutoff {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Cutoff::Below(limit) => value < limit,
            Cutoff::Above(limit) => value > limit,
            Cutoff::AtOrAbove(limit) => value >= limit,
        }
    }

    fn limit(&self) -> f64 {
        match *self {
            Cutoff::Below(limit) | Cutoff::Above(limit) | Cutoff::AtOrAbove(limit) => limit,
        }
    }
}

/// One row of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub cutoff: Cutoff,
    pub rate: f64,
}

impl Band {
    pub const fn below(limit: f64, rate: f64) -> Self {
        Self { cutoff: Cutoff::Below(limit), rate }
    }

    pub const fn above(limit: f64, rate: f64) -> Self {
        Self { cutoff: Cutoff::Above(limit), rate }
    }

    pub const fn at_or_above(limit: f64, rate: f64) -> Self {
        Self { cutoff: Cutoff::AtOrAbove(limit), rate }
    }
}

/// Ordered bands, first match wins; `fallback` applies when none match
///
/// Both fields are required when a schedule is loaded, so an override never
/// pairs new bands with an implicit zero fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSchedule {
    pub bands: Vec<Band>,
    pub fallback: f64,
}

impl ThresholdSchedule {
    pub fn new(bands: Vec<Band>, fallback: f64) -> Self {
        Self { bands, fallback }
    }

    /// Risk increment for the measured value
    pub fn rate(&self, value: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| band.cutoff.matches(value))
            .map(|band| band.rate)
            .unwrap_or(self.fallback)
    }

    /// Annual income over loan amount: thin coverage is penalised
    pub fn default_income_coverage() -> Self {
        Self::new(
            vec![
                Band::below(0.3, 0.15),
                Band::below(0.5, 0.10),
                Band::below(0.8, 0.05),
            ],
            0.0,
        )
    }

    /// Years with current employer
    pub fn default_employment_tenure() -> Self {
        Self::new(vec![Band::below(2.0, 0.12), Band::below(5.0, 0.06)], 0.0)
    }

    /// Months of credit history; whole months, so below 1 means no history at all
    pub fn default_credit_history() -> Self {
        Self::new(
            vec![
                Band::below(1.0, 0.15),
                Band::below(12.0, 0.10),
                Band::below(24.0, 0.05),
            ],
            0.0,
        )
    }

    /// Debt-to-income percent
    pub fn default_debt_to_income() -> Self {
        Self::new(
            vec![
                Band::above(70.0, 0.15),
                Band::above(50.0, 0.10),
                Band::above(30.0, 0.05),
            ],
            0.0,
        )
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.fallback.is_finite()
            && self
                .bands
                .iter()
                .all(|band| band.rate.is_finite() && band.cutoff.limit().is_finite())
    }
}

/// Two nested age windows; outside the outer window carries the larger load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeBands {
    /// Below this age is high risk
    pub outer_min: u32,
    /// Above this age is high risk
    pub outer_max: u32,
    pub outer_rate: f64,
    /// Below this age is moderate risk
    pub inner_min: u32,
    /// Above this age is moderate risk
    pub inner_max: u32,
    pub inner_rate: f64,
}

impl Default for AgeBands {
    fn default() -> Self {
        Self {
            outer_min: 25,
            outer_max: 65,
            outer_rate: 0.08,
            inner_min: 30,
            inner_max: 55,
            inner_rate: 0.03,
        }
    }
}

impl AgeBands {
    pub fn rate(&self, age: u32) -> f64 {
        if age < self.outer_min || age > self.outer_max {
            self.outer_rate
        } else if age < self.inner_min || age > self.inner_max {
            self.inner_rate
        } else {
            0.0
        }
    }
}

/// Collateral coverage ratio schedule plus the flat load for unsecured loans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollateralSchedule {
    /// Applied when no collateral is pledged, regardless of loan size
    pub unsecured_rate: f64,
    /// Applied to collateral value / loan amount
    pub coverage: ThresholdSchedule,
}

impl Default for CollateralSchedule {
    fn default() -> Self {
        Self {
            unsecured_rate: 0.10,
            coverage: ThresholdSchedule::new(
                vec![
                    Band::at_or_above(1.5, -0.08),
                    Band::at_or_above(1.2, -0.05),
                    Band::at_or_above(1.0, -0.03),
                    Band::at_or_above(0.8, 0.02),
                ],
                0.05,
            ),
        }
    }
}

impl CollateralSchedule {
    /// `coverage_ratio` is None for an unsecured loan
    pub fn rate(&self, coverage_ratio: Option<f64>) -> f64 {
        match coverage_ratio {
            Some(ratio) => self.coverage.rate(ratio),
            None => self.unsecured_rate,
        }
    }
}
