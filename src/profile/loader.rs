//! Load applicant profiles from CSV
//!
//! Expected header:
//! applicant_id,loan_amount,monthly_income,age,employment_years,employment_type,
//! education_level,marital_status,credit_history_months,previous_defaults,
//! collateral_value,debt_to_income_percent

use super::{ApplicantProfile, EmploymentType, EducationLevel, MaritalStatus};
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One applicant row as it appears in the CSV
#[derive(Debug, Deserialize)]
struct ProfileRow {
    applicant_id: String,
    loan_amount: f64,
    monthly_income: f64,
    age: u32,
    employment_years: u32,
    employment_type: String,
    education_level: String,
    marital_status: String,
    credit_history_months: u32,
    previous_defaults: u32,
    /// Blank means unsecured
    #[serde(default)]
    collateral_value: Option<f64>,
    debt_to_income_percent: f64,
}

/// Applicant profile tagged with its source identifier
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantRecord {
    pub applicant_id: String,
    pub profile: ApplicantProfile,
}

impl From<ProfileRow> for ApplicantRecord {
    fn from(row: ProfileRow) -> Self {
        // FromStr for the categories never fails, unknown text becomes Unspecified
        let employment_type = row
            .employment_type
            .parse::<EmploymentType>()
            .unwrap_or(EmploymentType::Unspecified);
        let education_level = row
            .education_level
            .parse::<EducationLevel>()
            .unwrap_or(EducationLevel::Unspecified);
        let marital_status = row
            .marital_status
            .parse::<MaritalStatus>()
            .unwrap_or(MaritalStatus::Unspecified);

        Self {
            applicant_id: row.applicant_id,
            profile: ApplicantProfile {
                loan_amount: row.loan_amount,
                monthly_income: row.monthly_income,
                age: row.age,
                employment_years: row.employment_years,
                employment_type,
                education_level,
                marital_status,
                credit_history_months: row.credit_history_months,
                previous_defaults: row.previous_defaults,
                collateral_value: row.collateral_value.unwrap_or(0.0),
                debt_to_income_percent: row.debt_to_income_percent,
            },
        }
    }
}

/// Load applicant records from a CSV file
///
/// Profiles are not range-checked here; the score engine validates each one.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantRecord>> {
    let file = File::open(path.as_ref())?;
    let records = load_profiles_from_reader(file)?;
    log::debug!(
        "loaded {} applicant(s) from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Load applicant records from any CSV reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: ProfileRow = result?;
        records.push(ApplicantRecord::from(row));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
applicant_id,loan_amount,monthly_income,age,employment_years,employment_type,education_level,marital_status,credit_history_months,previous_defaults,collateral_value,debt_to_income_percent
A-1,50000000,2000000,35,5,private_sector,higher,married,24,0,100000000,30.0
A-2, 20000000 , 800000 ,22,1,Entrepreneur,Complete Secondary,single,0,2,0,65
A-3,10000000,900000,40,8,freelancer,phd,engaged,60,0,,10
";

    #[test]
    fn test_load_sample() {
        let records = load_profiles_from_reader(SAMPLE.as_bytes()).expect("Failed to load");
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.applicant_id, "A-1");
        assert_eq!(first.profile.employment_type, EmploymentType::PrivateSector);
        assert_eq!(first.profile.collateral_value, 100_000_000.0);

        let second = &records[1];
        assert_eq!(second.profile.loan_amount, 20_000_000.0);
        assert_eq!(second.profile.employment_type, EmploymentType::Entrepreneur);
        assert_eq!(second.profile.education_level, EducationLevel::CompleteSecondary);
        assert_eq!(second.profile.previous_defaults, 2);
    }

    #[test]
    fn test_unknown_categories_and_blank_collateral() {
        let records = load_profiles_from_reader(SAMPLE.as_bytes()).expect("Failed to load");
        let third = &records[2].profile;

        assert_eq!(third.employment_type, EmploymentType::Unspecified);
        assert_eq!(third.education_level, EducationLevel::Unspecified);
        assert_eq!(third.marital_status, MaritalStatus::Unspecified);
        assert_eq!(third.collateral_value, 0.0);
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let bad = "\
applicant_id,loan_amount,monthly_income,age,employment_years,employment_type,education_level,marital_status,credit_history_months,previous_defaults,collateral_value,debt_to_income_percent
X,lots,1,30,1,other,higher,single,1,0,0,1
";
        assert!(load_profiles_from_reader(bad.as_bytes()).is_err());
    }
}
