//! End-to-end scoring scenarios through the public API

use approx::assert_abs_diff_eq;
use npl_scoring::{
    assess, classify_and_explain, compute_npl_rate, ApplicantProfile, DetailedTier,
    EducationLevel, EmploymentType, HeadlineTier, MaritalStatus, Recommendation, RiskFactor,
    ScoreEngine, ScoringError,
};

fn scenario_a() -> ApplicantProfile {
    ApplicantProfile {
        loan_amount: 50_000_000.0,
        monthly_income: 2_000_000.0,
        age: 35,
        employment_years: 5,
        employment_type: EmploymentType::PrivateSector,
        education_level: EducationLevel::Higher,
        marital_status: MaritalStatus::Married,
        credit_history_months: 24,
        previous_defaults: 0,
        collateral_value: 100_000_000.0,
        debt_to_income_percent: 30.0,
    }
}

#[test]
fn scenario_a_secured_private_sector_applicant() {
    let report = assess(&ScoreEngine::default(), &scenario_a()).expect("valid profile");

    // base 0.05 + income 0.10 + employment 0.05 - collateral 0.08
    assert_abs_diff_eq!(report.npl_rate.value(), 0.12, epsilon = 1e-12);
    assert_eq!(report.headline_tier, HeadlineTier::Medium);
    assert_eq!(report.detailed_tier, DetailedTier::Medium);
    assert_eq!(report.recommendation, Recommendation::ApproveWithConditions);
}

#[test]
fn scenario_b_unsecured_with_prior_defaults() {
    let profile = ApplicantProfile {
        collateral_value: 0.0,
        previous_defaults: 3,
        ..scenario_a()
    };
    let report = assess(&ScoreEngine::default(), &profile).expect("valid profile");

    // 0.20 without the collateral term, + 0.10 unsecured + 3 * 0.08
    assert_abs_diff_eq!(report.npl_rate.value(), 0.54, epsilon = 1e-12);
    assert_eq!(report.headline_tier, HeadlineTier::High);
    assert_eq!(report.detailed_tier, DetailedTier::VeryHigh);
    assert_eq!(report.recommendation, Recommendation::Reject);
    assert_eq!(
        report.risk_factors,
        vec![RiskFactor::PriorDefault, RiskFactor::InsufficientCollateral]
    );
}

#[test]
fn income_ratio_boundary_is_exact() {
    let engine = ScoreEngine::default();
    // 12 * 1.25M / 50M == 0.3 exactly
    let at_cutoff = ApplicantProfile {
        monthly_income: 1_250_000.0,
        ..scenario_a()
    };
    // Just under 0.3
    let below_cutoff = ApplicantProfile {
        monthly_income: 1_249_995.0,
        ..scenario_a()
    };

    let at = engine.score(&at_cutoff).expect("valid").value();
    let below = engine.score(&below_cutoff).expect("valid").value();
    assert_abs_diff_eq!(below - at, 0.05, epsilon = 1e-9);
}

#[test]
fn collateral_edges() {
    let engine = ScoreEngine::default();

    for loan_amount in [1_000_000.0, 50_000_000.0, 5_000_000_000.0] {
        let profile = ApplicantProfile {
            loan_amount,
            collateral_value: 0.0,
            ..scenario_a()
        };
        let breakdown = engine.score_detailed(&profile).expect("valid");
        let collateral = breakdown
            .components
            .iter()
            .find(|c| c.factor == npl_scoring::scoring::ScoreFactor::Collateral)
            .map(|c| c.contribution);
        assert_eq!(collateral, Some(0.10));
    }

    let covered_exactly = ApplicantProfile {
        collateral_value: 50_000_000.0,
        ..scenario_a()
    };
    let breakdown = engine.score_detailed(&covered_exactly).expect("valid");
    assert_eq!(breakdown.collateral_coverage, Some(1.0));
    assert_eq!(
        breakdown.contribution(npl_scoring::scoring::ScoreFactor::Collateral),
        -0.03
    );
}

#[test]
fn worst_case_clamps_to_ceiling() {
    let profile = ApplicantProfile {
        loan_amount: 10_000_000_000.0,
        monthly_income: 100_000.0,
        age: 19,
        employment_years: 0,
        employment_type: EmploymentType::Other,
        education_level: EducationLevel::IncompleteSecondary,
        marital_status: MaritalStatus::Divorced,
        credit_history_months: 0,
        previous_defaults: 10,
        collateral_value: 0.0,
        debt_to_income_percent: 95.0,
    };
    let rate = compute_npl_rate(&profile).expect("valid");
    assert_eq!(rate.value(), 0.95);

    let report = classify_and_explain(&profile, rate).expect("valid profile");
    assert_eq!(report.risk_factors.len(), 7);
}

#[test]
fn best_case_floors_at_minimum() {
    let profile = ApplicantProfile {
        loan_amount: 5_000_000.0,
        monthly_income: 4_000_000.0,
        age: 42,
        employment_years: 15,
        employment_type: EmploymentType::CivilServant,
        education_level: EducationLevel::Higher,
        marital_status: MaritalStatus::Married,
        credit_history_months: 96,
        previous_defaults: 0,
        collateral_value: 20_000_000.0,
        debt_to_income_percent: 10.0,
    };
    let rate = compute_npl_rate(&profile).expect("valid");
    assert_eq!(rate.value(), 0.01);
}

#[test]
fn rate_always_within_bounds() {
    let engine = ScoreEngine::default();
    let employment = [
        EmploymentType::CivilServant,
        EmploymentType::Entrepreneur,
        EmploymentType::Other,
        EmploymentType::Unspecified,
    ];

    for age in [18, 24, 30, 56, 80] {
        for defaults in [0, 1, 4, 10] {
            for collateral_value in [0.0, 10_000_000.0, 60_000_000.0, 200_000_000.0] {
                for employment_type in employment {
                    let profile = ApplicantProfile {
                        age,
                        previous_defaults: defaults,
                        collateral_value,
                        employment_type,
                        ..scenario_a()
                    };
                    let rate = engine.score(&profile).expect("valid").value();
                    assert!((0.01..=0.95).contains(&rate), "rate {rate} out of bounds");
                }
            }
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let engine = ScoreEngine::default();
    let profile = scenario_a();
    assert_eq!(
        engine.score(&profile).expect("valid"),
        engine.score(&profile).expect("valid")
    );
}

#[test]
fn out_of_contract_loan_is_rejected() {
    let profile = ApplicantProfile {
        loan_amount: -5.0,
        ..scenario_a()
    };
    assert!(matches!(
        compute_npl_rate(&profile),
        Err(ScoringError::InvalidProfile { field: "loan_amount", .. })
    ));

    let rate = npl_scoring::NplRate::new(0.5).expect("valid rate");
    let zero_loan = ApplicantProfile {
        loan_amount: 0.0,
        ..scenario_a()
    };
    assert!(matches!(
        classify_and_explain(&zero_loan, rate),
        Err(ScoringError::InvalidProfile { field: "loan_amount", .. })
    ));
}
