//! Scoring assumptions: the hand-authored rule table behind the NPL rate
//!
//! `ScoringAssumptions::default()` is the canonical table. A JSON file may
//! override any subset of sections; everything it omits keeps the default.
//! A threshold schedule is replaced whole: it needs both `bands` and `fallback`.

mod categories;
mod schedule;

pub use categories::{EducationRiskTable, EmploymentRiskTable, MaritalRiskTable};
pub use schedule::{AgeBands, Band, CollateralSchedule, Cutoff, ThresholdSchedule};

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Lowest rate the engine will report; a table may raise but not lower it
pub const DEFAULT_RATE_FLOOR: f64 = 0.01;
/// Highest rate the engine will report; a table may lower but not raise it
pub const DEFAULT_RATE_CEILING: f64 = 0.95;

/// Complete rule table consumed by the score engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringAssumptions {
    /// Starting point before any factor is added
    pub base_score: f64,

    /// Clamp applied to the summed score
    pub rate_floor: f64,
    pub rate_ceiling: f64,

    /// Keyed on annual income / loan amount
    pub income_coverage: ThresholdSchedule,

    pub age: AgeBands,

    /// Keyed on years with current employer
    pub employment_tenure: ThresholdSchedule,

    pub employment_type: EmploymentRiskTable,
    pub education: EducationRiskTable,
    pub marital_status: MaritalRiskTable,

    /// Keyed on months of credit history
    pub credit_history: ThresholdSchedule,

    /// Added once per prior default, uncapped
    pub per_default_penalty: f64,

    pub collateral: CollateralSchedule,

    /// Keyed on debt-to-income percent
    pub debt_to_income: ThresholdSchedule,
}

impl Default for ScoringAssumptions {
    fn default() -> Self {
        Self {
            base_score: 0.05,
            rate_floor: DEFAULT_RATE_FLOOR,
            rate_ceiling: DEFAULT_RATE_CEILING,
            income_coverage: ThresholdSchedule::default_income_coverage(),
            age: AgeBands::default(),
            employment_tenure: ThresholdSchedule::default_employment_tenure(),
            employment_type: EmploymentRiskTable::default(),
            education: EducationRiskTable::default(),
            marital_status: MaritalRiskTable::default(),
            credit_history: ThresholdSchedule::default_credit_history(),
            per_default_penalty: 0.08,
            collateral: CollateralSchedule::default(),
            debt_to_income: ThresholdSchedule::default_debt_to_income(),
        }
    }
}

impl ScoringAssumptions {
    /// Load assumptions from a JSON file and validate them
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let assumptions = Self::from_json_reader(BufReader::new(file))?;
        log::info!("loaded scoring assumptions from {}", path.as_ref().display());
        Ok(assumptions)
    }

    /// Load assumptions from any JSON reader and validate them
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let assumptions: Self = serde_json::from_reader(reader)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Reject tables that would produce NaN or an empty clamp range
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            self.base_score,
            self.rate_floor,
            self.rate_ceiling,
            self.per_default_penalty,
            self.age.outer_rate,
            self.age.inner_rate,
            self.collateral.unsecured_rate,
        ];
        let tables_finite = self
            .employment_type
            .values()
            .iter()
            .chain(self.education.values().iter())
            .chain(self.marital_status.values().iter())
            .chain(scalars.iter())
            .all(|v| v.is_finite());
        let schedules_finite = [
            &self.income_coverage,
            &self.employment_tenure,
            &self.credit_history,
            &self.debt_to_income,
            &self.collateral.coverage,
        ]
        .iter()
        .all(|s| s.is_finite());

        if !tables_finite || !schedules_finite {
            return Err(ScoringError::InvalidAssumptions(
                "all rates and cutoffs must be finite".to_string(),
            ));
        }

        if self.rate_floor < DEFAULT_RATE_FLOOR
            || self.rate_ceiling > DEFAULT_RATE_CEILING
            || self.rate_floor > self.rate_ceiling
        {
            return Err(ScoringError::InvalidAssumptions(format!(
                "rate clamp [{}, {}] must lie within [{}, {}] with floor <= ceiling",
                self.rate_floor, self.rate_ceiling, DEFAULT_RATE_FLOOR, DEFAULT_RATE_CEILING
            )));
        }

        Ok(())
    }
}
