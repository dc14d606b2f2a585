//! Applicant profile data structures and CSV loading

mod data;
pub mod loader;

pub use data::{ApplicantProfile, EmploymentType, EducationLevel, MaritalStatus, MAX_AGE, MIN_AGE};
pub use loader::{load_profiles, load_profiles_from_reader, ApplicantRecord};
