//! Score every applicant in a CSV file
//!
//! Outputs one row per valid applicant; rows that fail validation are logged
//! and skipped.

use anyhow::{Context, Result};
use clap::Parser;
use npl_scoring::profile::{load_profiles, ApplicantRecord};
use npl_scoring::{assess, RiskReport, ScoreEngine, ScoringAssumptions};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "score_batch", about = "Predict NPL rates for a CSV of loan applicants")]
struct Args {
    /// Input CSV of applicant profiles
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "npl_scores.csv")]
    output: PathBuf,

    /// JSON file overriding the default rule table
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let assumptions = match &args.assumptions {
        Some(path) => ScoringAssumptions::from_json_file(path)
            .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
        None => ScoringAssumptions::default(),
    };
    let engine = ScoreEngine::new(assumptions);

    let records = load_profiles(&args.input)
        .with_context(|| format!("failed to load applicants from {}", args.input.display()))?;
    println!("Loaded {} applicants in {:?}", records.len(), start.elapsed());

    // Each applicant is independent, so score in parallel
    let results: Vec<(&ApplicantRecord, Option<RiskReport>)> = records
        .par_iter()
        .map(|record| match assess(&engine, &record.profile) {
            Ok(report) => (record, Some(report)),
            Err(err) => {
                log::warn!("skipping applicant {}: {}", record.applicant_id, err);
                (record, None)
            }
        })
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    writer.write_record([
        "applicant_id",
        "npl_rate",
        "headline_tier",
        "detailed_tier",
        "recommendation",
        "risk_factors",
        "positive_factors",
    ])?;

    let mut scored = 0usize;
    let mut skipped = 0usize;
    for (record, report) in &results {
        let Some(report) = report else {
            skipped += 1;
            continue;
        };
        writer.write_record([
            record.applicant_id.clone(),
            format!("{:.4}", report.npl_rate.value()),
            report.headline_tier.label().to_string(),
            report.detailed_tier.label().to_string(),
            report.recommendation.label().to_string(),
            report.risk_factor_labels().join(";"),
            report.positive_factor_labels().join(";"),
        ])?;
        scored += 1;
    }
    writer.flush()?;

    println!(
        "Scored {} applicants ({} skipped) -> {}",
        scored,
        skipped,
        args.output.display()
    );
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
