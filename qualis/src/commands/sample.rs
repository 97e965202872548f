// qualis/src/commands/sample.rs
//
// USE CASE: Risk-driven sampling plan for an assessor's learner records.

use std::path::{Path, PathBuf};

use qualis_core::application::RiskEvaluator;
use qualis_core::infrastructure::config::load_project_config;

use super::assessor_source;
use super::risk::print_report;

pub async fn execute(
    project_dir: &Path,
    assessor_id: &str,
    population: usize,
    assessors: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_project_config(project_dir)?;
    let source = assessor_source(project_dir, &config, assessors);
    let evaluator = RiskEvaluator::new(&source, config.risk.weights);

    let (report, plan) = evaluator.plan(assessor_id, population).await;
    print_report(&report);

    println!(
        "🧪 Review {} of {} learner records:",
        plan.len(),
        plan.population
    );
    let positions: Vec<String> = plan.positions.iter().map(|p| format!("#{}", p)).collect();
    println!("   ➜ {}", positions.join(", "));

    // The plan is still drawn (at the baseline fraction) so the review can go ahead.
    if let Some(err) = report.error {
        anyhow::bail!("❌ {} for '{}'", err, assessor_id);
    }
    Ok(())
}
