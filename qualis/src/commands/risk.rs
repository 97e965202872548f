// qualis/src/commands/risk.rs
//
// USE CASE: Risk score of one assessor.

use std::path::{Path, PathBuf};

use qualis_core::application::{RiskEvaluator, RiskReport};
use qualis_core::infrastructure::config::load_project_config;

use super::assessor_source;

pub async fn execute(
    project_dir: &Path,
    assessor_id: &str,
    assessors: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_project_config(project_dir)?;
    let source = assessor_source(project_dir, &config, assessors);
    let evaluator = RiskEvaluator::new(&source, config.risk.weights);

    println!("🔎 Assessing '{}' ({})", assessor_id, source.path().display());
    let report = evaluator.evaluate(assessor_id).await;
    print_report(&report);

    match report.error {
        Some(err) => anyhow::bail!("❌ {} for '{}'", err, assessor_id),
        None => Ok(()),
    }
}

pub(crate) fn print_report(report: &RiskReport) {
    if let Some(err) = &report.error {
        println!("⚠️  {} (showing baseline values)", err);
    }
    println!("📊 Risk score: {:.1} / 10", report.assessment.score);
    println!(
        "🎯 Recommended sample: {} ({})",
        report.assessment.sample_fraction,
        report.assessment.sample_fraction.as_str()
    );
}
