//! Error types for profile validation, assumption loading and CSV input

use thiserror::Error;

/// Errors raised by the scoring library
#[derive(Debug, Error)]
pub enum ScoringError {
    /// An applicant attribute is outside the range the engine accepts
    #[error("invalid profile: {field} {reason}")]
    InvalidProfile {
        field: &'static str,
        reason: String,
    },

    /// A rate outside the reportable range [0.01, 0.95]
    #[error("invalid rate: {0} is outside [0.01, 0.95]")]
    InvalidRate(f64),

    /// A loaded rule table cannot be used for scoring
    #[error("invalid assumptions: {0}")]
    InvalidAssumptions(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScoringError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ScoringError::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
