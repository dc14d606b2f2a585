//! Score a single applicant given on the command line
//!
//! Prints the NPL rate, both risk tiers, factor lists and recommendation.

use anyhow::{Context, Result};
use clap::Parser;
use npl_scoring::{
    classify_and_explain, ApplicantProfile, DetailedTier, EducationLevel, EmploymentType,
    MaritalStatus, ScoreEngine, ScoringAssumptions,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "score_applicant", about = "Predict the NPL rate for one loan applicant")]
struct Args {
    /// Requested loan amount
    #[arg(long, default_value_t = 50_000_000.0)]
    loan_amount: f64,

    /// Gross monthly income
    #[arg(long, default_value_t = 2_000_000.0)]
    monthly_income: f64,

    #[arg(long, default_value_t = 35)]
    age: u32,

    /// Years with current employer
    #[arg(long, default_value_t = 5)]
    employment_years: u32,

    /// civil_servant, private_sector, state_owned_enterprise, entrepreneur, foreign_company, other
    #[arg(long, default_value = "civil_servant")]
    employment_type: EmploymentType,

    /// higher, specialized_secondary, complete_secondary, incomplete_secondary
    #[arg(long, default_value = "higher")]
    education_level: EducationLevel,

    /// married, single, divorced, widowed
    #[arg(long, default_value = "married")]
    marital_status: MaritalStatus,

    #[arg(long, default_value_t = 24)]
    credit_history_months: u32,

    #[arg(long, default_value_t = 0)]
    previous_defaults: u32,

    /// Pledged collateral value, 0 for unsecured
    #[arg(long, default_value_t = 100_000_000.0)]
    collateral_value: f64,

    /// Debt-to-income percent
    #[arg(long, default_value_t = 30.0)]
    debt_to_income_percent: f64,

    /// JSON file overriding the default rule table
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Include per-factor contributions
    #[arg(long)]
    breakdown: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = match &args.assumptions {
        Some(path) => ScoringAssumptions::from_json_file(path)
            .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
        None => ScoringAssumptions::default(),
    };
    let engine = ScoreEngine::new(assumptions);

    let profile = ApplicantProfile {
        loan_amount: args.loan_amount,
        monthly_income: args.monthly_income,
        age: args.age,
        employment_years: args.employment_years,
        employment_type: args.employment_type,
        education_level: args.education_level,
        marital_status: args.marital_status,
        credit_history_months: args.credit_history_months,
        previous_defaults: args.previous_defaults,
        collateral_value: args.collateral_value,
        debt_to_income_percent: args.debt_to_income_percent,
    };

    let breakdown = engine
        .score_detailed(&profile)
        .context("applicant could not be scored")?;
    let report = classify_and_explain(&profile, breakdown.rate)?;

    if args.json {
        let output = if args.breakdown {
            serde_json::json!({ "report": report, "breakdown": breakdown })
        } else {
            serde_json::to_value(&report)?
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("NPL rate: {} ({})", report.npl_rate, report.headline_tier.label());
    println!("Income/loan ratio: {:.2}%", report.income_to_loan_ratio * 100.0);
    println!(
        "Collateral: {}",
        if report.has_collateral { "secured" } else { "none" }
    );

    println!("\nRisk categories:");
    for tier in DetailedTier::all() {
        let marker = if tier == report.detailed_tier { "  <- current" } else { "" };
        println!("  {} ({}){}", tier.label(), tier.range_label(), marker);
    }

    println!("\nRisk factors:");
    for label in report.risk_factor_labels() {
        println!("  - {}", label);
    }
    println!("\nPositive factors:");
    for label in report.positive_factor_labels() {
        println!("  - {}", label);
    }

    println!("\nRecommendation: {}", report.recommendation.label());
    for action in report.recommendation.actions() {
        println!("  - {}", action);
    }

    if args.breakdown {
        println!("\nScore breakdown:");
        for component in &breakdown.components {
            println!("  {:<22} {:+.4}", component.factor.label(), component.contribution);
        }
        println!("  {:<22} {:.4}", "raw total", breakdown.raw_score);
        if breakdown.clamped() {
            println!("  clamped to {:.4}", breakdown.rate.value());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_match_profile_fields() {
        let args = Args::try_parse_from([
            "score_applicant",
            "--debt-to-income-percent",
            "55",
            "--employment-type",
            "entrepreneur",
        ])
        .expect("flags should parse");
        assert_eq!(args.debt_to_income_percent, 55.0);
        assert_eq!(args.employment_type, EmploymentType::Entrepreneur);

        assert!(Args::try_parse_from(["score_applicant", "--debt-to-income", "55"]).is_err());
    }
}
