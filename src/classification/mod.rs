//! Risk classification and explanation built on top of the NPL rate

mod factors;
mod tiers;

pub use factors::{positive_factors, risk_factors, PositiveFactor, RiskFactor};
pub use tiers::{DetailedTier, HeadlineTier, Recommendation};

use crate::error::Result;
use crate::profile::ApplicantProfile;
use crate::scoring::{NplRate, ScoreEngine};
use serde::Serialize;

/// Structured result handed to a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub npl_rate: NplRate,
    pub headline_tier: HeadlineTier,
    pub detailed_tier: DetailedTier,
    pub recommendation: Recommendation,
    pub risk_factors: Vec<RiskFactor>,
    pub positive_factors: Vec<PositiveFactor>,
    pub income_to_loan_ratio: f64,
    pub has_collateral: bool,
}

impl RiskReport {
    pub fn risk_factor_labels(&self) -> Vec<&'static str> {
        self.risk_factors.iter().map(|f| f.label()).collect()
    }

    pub fn positive_factor_labels(&self) -> Vec<&'static str> {
        self.positive_factors.iter().map(|f| f.label()).collect()
    }
}

/// Derive both tiers, the recommendation and the factor lists for a scored profile
///
/// Both tier schemes are computed independently from the same rate. The
/// profile is validated first so ratios are never NaN or infinite.
pub fn classify_and_explain(profile: &ApplicantProfile, rate: NplRate) -> Result<RiskReport> {
    profile.validate()?;
    let headline_tier = HeadlineTier::classify(rate);

    Ok(RiskReport {
        npl_rate: rate,
        headline_tier,
        detailed_tier: DetailedTier::classify(rate),
        recommendation: Recommendation::for_tier(headline_tier),
        risk_factors: risk_factors(profile),
        positive_factors: positive_factors(profile),
        income_to_loan_ratio: profile.income_to_loan_ratio(),
        has_collateral: profile.has_collateral(),
    })
}

/// Score with the given engine and explain the result in one step
pub fn assess(engine: &ScoreEngine, profile: &ApplicantProfile) -> Result<RiskReport> {
    let rate = engine.score(profile)?;
    classify_and_explain(profile, rate)
}
