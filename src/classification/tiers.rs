//! Risk tiers derived from the NPL rate and the lending recommendation

use crate::scoring::NplRate;
use serde::Serialize;

/// Coarse three-band tier driving the headline verdict and recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineTier {
    Low,
    Medium,
    High,
}

impl HeadlineTier {
    /// <= 10% low, <= 25% medium, otherwise high
    pub fn classify(rate: NplRate) -> Self {
        match rate.value() {
            r if r <= 0.10 => HeadlineTier::Low,
            r if r <= 0.25 => HeadlineTier::Medium,
            _ => HeadlineTier::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeadlineTier::Low => "low risk",
            HeadlineTier::Medium => "medium risk",
            HeadlineTier::High => "high risk",
        }
    }
}

/// Finer five-band tier used for detailed messaging and the category list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailedTier {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DetailedTier {
    pub fn classify(rate: NplRate) -> Self {
        match rate.value() {
            r if r <= 0.05 => DetailedTier::VeryLow,
            r if r <= 0.10 => DetailedTier::Low,
            r if r <= 0.20 => DetailedTier::Medium,
            r if r <= 0.30 => DetailedTier::High,
            _ => DetailedTier::VeryHigh,
        }
    }

    /// Every category, lowest risk first
    pub fn all() -> [DetailedTier; 5] {
        [
            DetailedTier::VeryLow,
            DetailedTier::Low,
            DetailedTier::Medium,
            DetailedTier::High,
            DetailedTier::VeryHigh,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailedTier::VeryLow => "very low risk",
            DetailedTier::Low => "acceptable risk",
            DetailedTier::Medium => "risk requiring attention",
            DetailedTier::High => "high risk",
            DetailedTier::VeryHigh => "very high risk",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            DetailedTier::VeryLow => "0-5%",
            DetailedTier::Low => "5-10%",
            DetailedTier::Medium => "10-20%",
            DetailedTier::High => "20-30%",
            DetailedTier::VeryHigh => "30%+",
        }
    }
}

/// Lending decision suggested by the headline tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    ApproveWithConditions,
    Reject,
}

impl Recommendation {
    pub fn for_tier(tier: HeadlineTier) -> Self {
        match tier {
            HeadlineTier::Low => Recommendation::Approve,
            HeadlineTier::Medium => Recommendation::ApproveWithConditions,
            HeadlineTier::High => Recommendation::Reject,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve: low-risk applicant",
            Recommendation::ApproveWithConditions => {
                "approve with conditions: medium-risk applicant"
            }
            Recommendation::Reject => "recommend rejection: high-risk applicant",
        }
    }

    /// Follow-up actions in display order
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Recommendation::Approve => &[
                "lend on standard terms",
                "apply routine monitoring",
            ],
            Recommendation::ApproveWithConditions => &[
                "require additional collateral",
                "raise the interest rate",
                "monitor monthly",
            ],
            Recommendation::Reject => &[
                "applicant should raise income level",
                "applicant should increase collateral",
                "applicant should reduce the loan amount",
            ],
        }
    }
}
