//! Risk increments for categorical applicant attributes
//!
//! Each table carries an explicit `unmapped` increment used for values outside
//! the known set.

use crate::profile::{EducationLevel, EmploymentType, MaritalStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentRiskTable {
    pub civil_servant: f64,
    pub foreign_company: f64,
    pub state_owned_enterprise: f64,
    pub private_sector: f64,
    pub entrepreneur: f64,
    pub other: f64,
    pub unmapped: f64,
}

impl Default for EmploymentRiskTable {
    fn default() -> Self {
        Self {
            civil_servant: 0.00,
            foreign_company: 0.02,
            state_owned_enterprise: 0.03,
            private_sector: 0.05,
            entrepreneur: 0.08,
            other: 0.10,
            unmapped: 0.05,
        }
    }
}

impl EmploymentRiskTable {
    pub fn rate(&self, employment: EmploymentType) -> f64 {
        match employment {
            EmploymentType::CivilServant => self.civil_servant,
            EmploymentType::ForeignCompany => self.foreign_company,
            EmploymentType::StateOwnedEnterprise => self.state_owned_enterprise,
            EmploymentType::PrivateSector => self.private_sector,
            EmploymentType::Entrepreneur => self.entrepreneur,
            EmploymentType::Other => self.other,
            EmploymentType::Unspecified => self.unmapped,
        }
    }

    pub(crate) fn values(&self) -> [f64; 7] {
        [
            self.civil_servant,
            self.foreign_company,
            self.state_owned_enterprise,
            self.private_sector,
            self.entrepreneur,
            self.other,
            self.unmapped,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRiskTable {
    pub higher: f64,
    pub specialized_secondary: f64,
    pub complete_secondary: f64,
    pub incomplete_secondary: f64,
    pub unmapped: f64,
}

impl Default for EducationRiskTable {
    fn default() -> Self {
        Self {
            higher: 0.00,
            specialized_secondary: 0.02,
            complete_secondary: 0.05,
            incomplete_secondary: 0.08,
            unmapped: 0.03,
        }
    }
}

impl EducationRiskTable {
    pub fn rate(&self, education: EducationLevel) -> f64 {
        match education {
            EducationLevel::Higher => self.higher,
            EducationLevel::SpecializedSecondary => self.specialized_secondary,
            EducationLevel::CompleteSecondary => self.complete_secondary,
            EducationLevel::IncompleteSecondary => self.incomplete_secondary,
            EducationLevel::Unspecified => self.unmapped,
        }
    }

    pub(crate) fn values(&self) -> [f64; 5] {
        [
            self.higher,
            self.specialized_secondary,
            self.complete_secondary,
            self.incomplete_secondary,
            self.unmapped,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaritalRiskTable {
    pub married: f64,
    pub single: f64,
    pub divorced: f64,
    pub widowed: f64,
    pub unmapped: f64,
}

impl Default for MaritalRiskTable {
    fn default() -> Self {
        Self {
            married: 0.00,
            single: 0.03,
            divorced: 0.08,
            widowed: 0.05,
            unmapped: 0.02,
        }
    }
}

impl MaritalRiskTable {
    pub fn rate(&self, status: MaritalStatus) -> f64 {
        match status {
            MaritalStatus::Married => self.married,
            MaritalStatus::Single => self.single,
            MaritalStatus::Divorced => self.divorced,
            MaritalStatus::Widowed => self.widowed,
            MaritalStatus::Unspecified => self.unmapped,
        }
    }

    pub(crate) fn values(&self) -> [f64; 5] {
        [self.married, self.single, self.divorced, self.widowed, self.unmapped]
    }
}
