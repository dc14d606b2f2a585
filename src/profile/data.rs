//! Applicant profile and categorical attributes

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Youngest applicant age the engine accepts
pub const MIN_AGE: u32 = 18;
/// Oldest applicant age the engine accepts
pub const MAX_AGE: u32 = 80;

/// Lowercase and strip separators so "Civil Servant", "civil_servant" and
/// "CivilServant" all compare equal
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Employer category of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    CivilServant,
    PrivateSector,
    StateOwnedEnterprise,
    Entrepreneur,
    ForeignCompany,
    Other,
    /// Value not in the known set; scored with the fallback increment
    #[serde(other)]
    Unspecified,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::CivilServant => "civil_servant",
            EmploymentType::PrivateSector => "private_sector",
            EmploymentType::StateOwnedEnterprise => "state_owned_enterprise",
            EmploymentType::Entrepreneur => "entrepreneur",
            EmploymentType::ForeignCompany => "foreign_company",
            EmploymentType::Other => "other",
            EmploymentType::Unspecified => "unspecified",
        }
    }

    /// Employment whose income is treated as irregular
    pub fn is_unstable(&self) -> bool {
        matches!(self, EmploymentType::Entrepreneur | EmploymentType::Other)
    }

    /// Employment whose income is treated as secure
    pub fn is_stable(&self) -> bool {
        matches!(self, EmploymentType::CivilServant | EmploymentType::ForeignCompany)
    }
}

impl FromStr for EmploymentType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match normalize_key(s).as_str() {
            "civilservant" | "government" | "public" => EmploymentType::CivilServant,
            "privatesector" | "private" => EmploymentType::PrivateSector,
            "stateownedenterprise" | "stateowned" | "soe" => EmploymentType::StateOwnedEnterprise,
            "entrepreneur" | "selfemployed" | "business" => EmploymentType::Entrepreneur,
            "foreigncompany" | "foreign" => EmploymentType::ForeignCompany,
            "other" => EmploymentType::Other,
            _ => EmploymentType::Unspecified,
        })
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest completed education
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Higher,
    SpecializedSecondary,
    CompleteSecondary,
    IncompleteSecondary,
    #[serde(other)]
    Unspecified,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Higher => "higher",
            EducationLevel::SpecializedSecondary => "specialized_secondary",
            EducationLevel::CompleteSecondary => "complete_secondary",
            EducationLevel::IncompleteSecondary => "incomplete_secondary",
            EducationLevel::Unspecified => "unspecified",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match normalize_key(s).as_str() {
            "higher" | "university" | "tertiary" => EducationLevel::Higher,
            "specializedsecondary" | "vocational" => EducationLevel::SpecializedSecondary,
            "completesecondary" | "secondary" => EducationLevel::CompleteSecondary,
            "incompletesecondary" => EducationLevel::IncompleteSecondary,
            _ => EducationLevel::Unspecified,
        })
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Married,
    Single,
    Divorced,
    Widowed,
    #[serde(other)]
    Unspecified,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "married",
            MaritalStatus::Single => "single",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
            MaritalStatus::Unspecified => "unspecified",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match normalize_key(s).as_str() {
            "married" => MaritalStatus::Married,
            "single" => MaritalStatus::Single,
            "divorced" => MaritalStatus::Divorced,
            "widowed" | "widow" | "widower" => MaritalStatus::Widowed,
            _ => MaritalStatus::Unspecified,
        })
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared attributes of a single loan applicant
///
/// Currency amounts share one unit (the loan currency); no conversion is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Requested loan amount, must be > 0
    pub loan_amount: f64,

    /// Gross monthly income, must be > 0
    pub monthly_income: f64,

    /// Age in whole years, [18, 80]
    pub age: u32,

    /// Years with current employer
    pub employment_years: u32,

    pub employment_type: EmploymentType,

    pub education_level: EducationLevel,

    pub marital_status: MaritalStatus,

    /// Length of credit bureau history in months
    pub credit_history_months: u32,

    /// Count of earlier loans that went into default
    pub previous_defaults: u32,

    /// Pledged collateral value, 0 means unsecured
    pub collateral_value: f64,

    /// Share of income committed to debt service, percent in [0, 100]
    pub debt_to_income_percent: f64,
}

impl Default for ApplicantProfile {
    /// Typical applicant used as the starting point of the entry form
    fn default() -> Self {
        Self {
            loan_amount: 50_000_000.0,
            monthly_income: 2_000_000.0,
            age: 35,
            employment_years: 5,
            employment_type: EmploymentType::CivilServant,
            education_level: EducationLevel::Higher,
            marital_status: MaritalStatus::Married,
            credit_history_months: 24,
            previous_defaults: 0,
            collateral_value: 100_000_000.0,
            debt_to_income_percent: 30.0,
        }
    }
}

impl ApplicantProfile {
    /// Check every field against the range the engine is defined on
    pub fn validate(&self) -> Result<()> {
        if !self.loan_amount.is_finite() || self.loan_amount <= 0.0 {
            return Err(ScoringError::invalid(
                "loan_amount",
                format!("must be a positive amount, got {}", self.loan_amount),
            ));
        }
        if !self.monthly_income.is_finite() || self.monthly_income <= 0.0 {
            return Err(ScoringError::invalid(
                "monthly_income",
                format!("must be a positive amount, got {}", self.monthly_income),
            ));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ScoringError::invalid(
                "age",
                format!("must be within [{MIN_AGE}, {MAX_AGE}], got {}", self.age),
            ));
        }
        if !self.collateral_value.is_finite() || self.collateral_value < 0.0 {
            return Err(ScoringError::invalid(
                "collateral_value",
                format!("must be zero or positive, got {}", self.collateral_value),
            ));
        }
        if !self.debt_to_income_percent.is_finite()
            || !(0.0..=100.0).contains(&self.debt_to_income_percent)
        {
            return Err(ScoringError::invalid(
                "debt_to_income_percent",
                format!("must be within [0, 100], got {}", self.debt_to_income_percent),
            ));
        }
        Ok(())
    }

    /// Annual income over loan amount
    pub fn income_to_loan_ratio(&self) -> f64 {
        (self.monthly_income * 12.0) / self.loan_amount
    }

    /// Collateral value over loan amount, None when the loan is unsecured
    pub fn collateral_coverage(&self) -> Option<f64> {
        if self.collateral_value > 0.0 {
            Some(self.collateral_value / self.loan_amount)
        } else {
            None
        }
    }

    pub fn has_collateral(&self) -> bool {
        self.collateral_value > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(ApplicantProfile::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_loan() {
        let profile = ApplicantProfile {
            loan_amount: 0.0,
            ..Default::default()
        };
        match profile.validate() {
            Err(ScoringError::InvalidProfile { field, .. }) => assert_eq!(field, "loan_amount"),
            other => panic!("expected invalid loan amount, got {:?}", other),
        }

        let negative = ApplicantProfile {
            loan_amount: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = ApplicantProfile {
            loan_amount: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_age_bounds() {
        for age in [18, 80] {
            let profile = ApplicantProfile { age, ..Default::default() };
            assert!(profile.validate().is_ok(), "age {age} should be accepted");
        }
        for age in [17, 81] {
            let profile = ApplicantProfile { age, ..Default::default() };
            assert!(profile.validate().is_err(), "age {age} should be rejected");
        }
    }

    #[test]
    fn test_debt_to_income_bounds() {
        let at_max = ApplicantProfile {
            debt_to_income_percent: 100.0,
            ..Default::default()
        };
        assert!(at_max.validate().is_ok());

        let over = ApplicantProfile {
            debt_to_income_percent: 100.5,
            ..Default::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_ratios() {
        let profile = ApplicantProfile::default();
        // 12 * 2M / 50M
        assert!((profile.income_to_loan_ratio() - 0.48).abs() < 1e-12);
        assert_eq!(profile.collateral_coverage(), Some(2.0));

        let unsecured = ApplicantProfile {
            collateral_value: 0.0,
            ..Default::default()
        };
        assert_eq!(unsecured.collateral_coverage(), None);
        assert!(!unsecured.has_collateral());
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!("civil_servant".parse::<EmploymentType>(), Ok(EmploymentType::CivilServant));
        assert_eq!("Foreign Company".parse::<EmploymentType>(), Ok(EmploymentType::ForeignCompany));
        assert_eq!("astronaut".parse::<EmploymentType>(), Ok(EmploymentType::Unspecified));

        assert_eq!("Specialized-Secondary".parse::<EducationLevel>(), Ok(EducationLevel::SpecializedSecondary));
        assert_eq!("".parse::<EducationLevel>(), Ok(EducationLevel::Unspecified));

        assert_eq!("DIVORCED".parse::<MaritalStatus>(), Ok(MaritalStatus::Divorced));
        assert_eq!("engaged".parse::<MaritalStatus>(), Ok(MaritalStatus::Unspecified));
    }

    #[test]
    fn test_json_unknown_categories_fall_back() {
        let json = r#"{
            "loan_amount": 50000000.0,
            "monthly_income": 2000000.0,
            "age": 35,
            "employment_years": 5,
            "employment_type": "freelancer",
            "education_level": "doctorate",
            "marital_status": "engaged",
            "credit_history_months": 24,
            "previous_defaults": 0,
            "collateral_value": 100000000.0,
            "debt_to_income_percent": 30.0
        }"#;
        let profile: ApplicantProfile = serde_json::from_str(json).expect("unknown values accepted");

        assert_eq!(profile.employment_type, EmploymentType::Unspecified);
        assert_eq!(profile.education_level, EducationLevel::Unspecified);
        assert_eq!(profile.marital_status, MaritalStatus::Unspecified);

        // Known values still map to their own variants
        let known = json.replace("freelancer", "foreign_company");
        let profile: ApplicantProfile = serde_json::from_str(&known).expect("valid json");
        assert_eq!(profile.employment_type, EmploymentType::ForeignCompany);
    }

    #[test]
    fn test_employment_stability_sets() {
        assert!(EmploymentType::Entrepreneur.is_unstable());
        assert!(EmploymentType::Other.is_unstable());
        assert!(!EmploymentType::Unspecified.is_unstable());
        assert!(EmploymentType::CivilServant.is_stable());
        assert!(EmploymentType::ForeignCompany.is_stable());
        assert!(!EmploymentType::StateOwnedEnterprise.is_stable());
    }
}
