//! NPL Scoring - rule-based non-performing loan probability for loan applicants
//!
//! This library provides:
//! - Applicant profile data, validation and CSV loading
//! - The hand-authored scoring rule table as configurable assumptions
//! - A deterministic score engine mapping a profile to a bounded NPL rate
//! - Risk tiering, factor extraction and lending recommendations

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod scoring;
pub mod classification;

// Re-export commonly used types
pub use error::{Result, ScoringError};
pub use profile::{ApplicantProfile, EmploymentType, EducationLevel, MaritalStatus};
pub use assumptions::ScoringAssumptions;
pub use scoring::{compute_npl_rate, NplRate, ScoreBreakdown, ScoreEngine};
pub use classification::{
    assess, classify_and_explain, DetailedTier, HeadlineTier, PositiveFactor, Recommendation,
    RiskFactor, RiskReport,
};
