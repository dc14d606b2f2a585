//! Score engine: applicant profile to clamped NPL rate

use super::breakdown::{ScoreBreakdown, ScoreComponent, ScoreFactor};
use super::NplRate;
use crate::assumptions::{ScoringAssumptions, DEFAULT_RATE_CEILING, DEFAULT_RATE_FLOOR};
use crate::error::Result;
use crate::profile::ApplicantProfile;

/// Decimal places kept in the raw sum
const SCORE_PRECISION: f64 = 1e10;

/// Strip binary floating-point residue so hand-authored sums land on their
/// literal values (0.05 + 0.10 + 0.05 - 0.08 == 0.12)
fn normalize_score(raw: f64) -> f64 {
    (raw * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// Stateless scorer over a fixed rule table
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    assumptions: ScoringAssumptions,
}

impl ScoreEngine {
    pub fn new(assumptions: ScoringAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ScoringAssumptions {
        &self.assumptions
    }

    /// Predicted NPL probability for the profile
    pub fn score(&self, profile: &ApplicantProfile) -> Result<NplRate> {
        self.score_detailed(profile).map(|breakdown| breakdown.rate)
    }

    /// Score the profile and keep every factor's contribution
    pub fn score_detailed(&self, profile: &ApplicantProfile) -> Result<ScoreBreakdown> {
        profile.validate()?;

        let a = &self.assumptions;
        let income_to_loan_ratio = profile.income_to_loan_ratio();
        let collateral_coverage = profile.collateral_coverage();

        let components = vec![
            ScoreComponent {
                factor: ScoreFactor::Base,
                contribution: a.base_score,
            },
            ScoreComponent {
                factor: ScoreFactor::IncomeCoverage,
                contribution: a.income_coverage.rate(income_to_loan_ratio),
            },
            ScoreComponent {
                factor: ScoreFactor::Age,
                contribution: a.age.rate(profile.age),
            },
            ScoreComponent {
                factor: ScoreFactor::EmploymentTenure,
                contribution: a.employment_tenure.rate(profile.employment_years as f64),
            },
            ScoreComponent {
                factor: ScoreFactor::EmploymentType,
                contribution: a.employment_type.rate(profile.employment_type),
            },
            ScoreComponent {
                factor: ScoreFactor::Education,
                contribution: a.education.rate(profile.education_level),
            },
            ScoreComponent {
                factor: ScoreFactor::MaritalStatus,
                contribution: a.marital_status.rate(profile.marital_status),
            },
            ScoreComponent {
                factor: ScoreFactor::CreditHistory,
                contribution: a.credit_history.rate(profile.credit_history_months as f64),
            },
            ScoreComponent {
                factor: ScoreFactor::PriorDefaults,
                contribution: profile.previous_defaults as f64 * a.per_default_penalty,
            },
            ScoreComponent {
                factor: ScoreFactor::Collateral,
                contribution: a.collateral.rate(collateral_coverage),
            },
            ScoreComponent {
                factor: ScoreFactor::DebtToIncome,
                contribution: a.debt_to_income.rate(profile.debt_to_income_percent),
            },
        ];

        for component in &components {
            log::trace!(
                "{}: {:+.4}",
                component.factor.label(),
                component.contribution
            );
        }

        let raw_score = normalize_score(components.iter().map(|c| c.contribution).sum());
        // The table's clamp is intersected with the reportable range, since the
        // fields are public and may bypass validation. f64::clamp would panic
        // on an inverted range.
        let floor = a.rate_floor.max(DEFAULT_RATE_FLOOR);
        let ceiling = a.rate_ceiling.min(DEFAULT_RATE_CEILING);
        let rate = NplRate(raw_score.max(floor).min(ceiling));

        log::debug!(
            "scored applicant: raw {:.4}, rate {:.4}{}",
            raw_score,
            rate.value(),
            if raw_score != rate.value() { " (clamped)" } else { "" }
        );

        Ok(ScoreBreakdown {
            components,
            raw_score,
            rate,
            income_to_loan_ratio,
            collateral_coverage,
        })
    }
}
