//! Risk and positive factor extraction
//!
//! Each predicate is evaluated independently against the profile and the
//! results keep a fixed order. The cutoffs are fixed and do not follow the
//! scoring assumptions.

use crate::profile::ApplicantProfile;
use serde::Serialize;

const LOW_INCOME_RATIO: f64 = 0.3;
const ADEQUATE_INCOME_RATIO: f64 = 0.5;
const HIGH_DEBT_TO_INCOME: f64 = 50.0;
const LOW_DEBT_TO_INCOME: f64 = 30.0;

/// Observation that raises the applicant's risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    InsufficientIncome,
    RiskyAge,
    LowWorkExperience,
    UnstableIncome,
    PriorDefault,
    HighDebtBurden,
    InsufficientCollateral,
    /// Emitted alone when no other risk factor applies
    NoMajorRiskDetected,
}

impl RiskFactor {
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::InsufficientIncome => "insufficient income level",
            RiskFactor::RiskyAge => "risky age",
            RiskFactor::LowWorkExperience => "low work experience",
            RiskFactor::UnstableIncome => "unstable income",
            RiskFactor::PriorDefault => "prior loan default",
            RiskFactor::HighDebtBurden => "high debt burden",
            RiskFactor::InsufficientCollateral => "insufficient collateral",
            RiskFactor::NoMajorRiskDetected => "no major risk factor detected",
        }
    }
}

/// Observation that lowers the applicant's risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositiveFactor {
    AdequateIncome,
    StableAge,
    StrongWorkExperience,
    StableEmployment,
    CleanCreditHistory,
    LowDebtBurden,
    /// Emitted alone when no other positive factor applies
    NoNotablePositive,
}

impl PositiveFactor {
    pub fn label(&self) -> &'static str {
        match self {
            PositiveFactor::AdequateIncome => "adequate income level",
            PositiveFactor::StableAge => "stable age",
            PositiveFactor::StrongWorkExperience => "strong work experience",
            PositiveFactor::StableEmployment => "stable employment",
            PositiveFactor::CleanCreditHistory => "clean credit history",
            PositiveFactor::LowDebtBurden => "low debt burden",
            PositiveFactor::NoNotablePositive => "no notable positive factor",
        }
    }
}

pub fn risk_factors(profile: &ApplicantProfile) -> Vec<RiskFactor> {
    let checks = [
        (
            profile.income_to_loan_ratio() < LOW_INCOME_RATIO,
            RiskFactor::InsufficientIncome,
        ),
        (profile.age < 25 || profile.age > 65, RiskFactor::RiskyAge),
        (profile.employment_years < 2, RiskFactor::LowWorkExperience),
        (profile.employment_type.is_unstable(), RiskFactor::UnstableIncome),
        (profile.previous_defaults > 0, RiskFactor::PriorDefault),
        (
            profile.debt_to_income_percent > HIGH_DEBT_TO_INCOME,
            RiskFactor::HighDebtBurden,
        ),
        (
            profile.collateral_value < profile.loan_amount,
            RiskFactor::InsufficientCollateral,
        ),
    ];

    let found: Vec<RiskFactor> = checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, factor)| *factor)
        .collect();

    if found.is_empty() {
        vec![RiskFactor::NoMajorRiskDetected]
    } else {
        found
    }
}

pub fn positive_factors(profile: &ApplicantProfile) -> Vec<PositiveFactor> {
    let checks = [
        (
            profile.income_to_loan_ratio() >= ADEQUATE_INCOME_RATIO,
            PositiveFactor::AdequateIncome,
        ),
        ((30..=55).contains(&profile.age), PositiveFactor::StableAge),
        (profile.employment_years >= 5, PositiveFactor::StrongWorkExperience),
        (profile.employment_type.is_stable(), PositiveFactor::StableEmployment),
        (profile.previous_defaults == 0, PositiveFactor::CleanCreditHistory),
        (
            profile.debt_to_income_percent <= LOW_DEBT_TO_INCOME,
            PositiveFactor::LowDebtBurden,
        ),
    ];

    let found: Vec<PositiveFactor> = checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, factor)| *factor)
        .collect();

    if found.is_empty() {
        vec![PositiveFactor::NoNotablePositive]
    } else {
        found
    }
}
