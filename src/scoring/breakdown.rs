//! Per-factor score contributions

use super::NplRate;
use serde::Serialize;

/// Term of the additive score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    IncomeCoverage,
    Age,
    EmploymentTenure,
    EmploymentType,
    Education,
    MaritalStatus,
    CreditHistory,
    PriorDefaults,
    Collateral,
    DebtToIncome,
}

impl ScoreFactor {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreFactor::Base => "base score",
            ScoreFactor::IncomeCoverage => "income coverage",
            ScoreFactor::Age => "age",
            ScoreFactor::EmploymentTenure => "employment tenure",
            ScoreFactor::EmploymentType => "employment type",
            ScoreFactor::Education => "education level",
            ScoreFactor::MaritalStatus => "marital status",
            ScoreFactor::CreditHistory => "credit history length",
            ScoreFactor::PriorDefaults => "prior defaults",
            ScoreFactor::Collateral => "collateral coverage",
            ScoreFactor::DebtToIncome => "debt-to-income",
        }
    }
}

/// One factor's signed contribution to the raw score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub contribution: f64,
}

/// Full audit trail of a scoring run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Contributions in evaluation order, base score first
    pub components: Vec<ScoreComponent>,

    /// Sum of contributions before clamping
    pub raw_score: f64,

    /// Clamped rate
    pub rate: NplRate,

    /// Annual income over loan amount
    pub income_to_loan_ratio: f64,

    /// Collateral over loan amount, None when unsecured
    pub collateral_coverage: Option<f64>,
}

impl ScoreBreakdown {
    /// True when the raw score fell outside the clamp range
    pub fn clamped(&self) -> bool {
        self.raw_score != self.rate.value()
    }

    pub fn contribution(&self, factor: ScoreFactor) -> f64 {
        self.components
            .iter()
            .filter(|c| c.factor == factor)
            .map(|c| c.contribution)
            .sum()
    }

    /// Factors that pushed the score up, largest first
    pub fn top_contributors(&self, n: usize) -> Vec<ScoreComponent> {
        let mut positive: Vec<ScoreComponent> = self
            .components
            .iter()
            .filter(|c| c.factor != ScoreFactor::Base && c.contribution > 0.0)
            .copied()
            .collect();
        positive.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
        positive.truncate(n);
        positive
    }
}
