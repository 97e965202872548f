// qualis-core/src/application/risk.rs
//
// USE CASE: risk-based sampling for internal quality assurance.

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::domain::quality::{RiskAssessment, RiskWeights, SamplingPlan};
use crate::error::QualisError;
use crate::ports::AssessorSource;

pub const RISK_FAILURE_MESSAGE: &str = "Failed to calculate risk score";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub assessor_id: String,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RiskReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub struct RiskEvaluator<'a> {
    source: &'a dyn AssessorSource,
    weights: RiskWeights,
}

impl<'a> RiskEvaluator<'a> {
    pub fn new(source: &'a dyn AssessorSource, weights: RiskWeights) -> Self {
        Self { source, weights }
    }

    /// Always yields a report. Any failure is logged and replaced by the
    /// baseline assessment (score 0, lowest fraction) with the error set.
    #[instrument(skip(self))]
    pub async fn evaluate(&self, assessor_id: &str) -> RiskReport {
        match self.try_evaluate(assessor_id).await {
            Ok(assessment) => {
                info!(
                    score = assessment.score,
                    fraction = assessment.sample_fraction.as_str(),
                    "Risk assessed"
                );
                RiskReport {
                    assessor_id: assessor_id.to_string(),
                    assessment,
                    error: None,
                }
            }
            Err(e) => {
                error!(error = %e, "Error calculating risk score");
                RiskReport {
                    assessor_id: assessor_id.to_string(),
                    assessment: RiskAssessment::default(),
                    error: Some(RISK_FAILURE_MESSAGE.to_string()),
                }
            }
        }
    }

    async fn try_evaluate(&self, assessor_id: &str) -> Result<RiskAssessment, QualisError> {
        let profile = self.source.fetch(assessor_id).await?;
        profile.check(assessor_id)?;
        Ok(RiskAssessment::compute(&profile, &self.weights))
    }

    /// Evaluates the assessor, then draws the records to review.
    pub async fn plan(&self, assessor_id: &str, population: usize) -> (RiskReport, SamplingPlan) {
        let report = self.evaluate(assessor_id).await;
        let plan = SamplingPlan::draw(population, report.assessment.sample_fraction);
        info!(assessor_id, population, sampled = plan.len(), "Sampling plan drawn");
        (report, plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quality::{RiskProfile, SampleFraction};
    use crate::infrastructure::adapters::InMemoryAssessorSource;

    fn source() -> InMemoryAssessorSource {
        InMemoryAssessorSource::new()
            .with(
                "a-1",
                RiskProfile {
                    experience_months: 24.0,
                    discrepancy_rate: 1.0,
                    compliance_issues: 0.0,
                    learner_feedback: 9.0,
                },
            )
            .with(
                "broken",
                RiskProfile {
                    experience_months: f64::NAN,
                    discrepancy_rate: 1.0,
                    compliance_issues: 0.0,
                    learner_feedback: 9.0,
                },
            )
    }

    #[tokio::test]
    async fn test_evaluate_known_assessor() {
        let source = source();
        let evaluator = RiskEvaluator::new(&source, RiskWeights::default());

        let report = evaluator.evaluate("a-1").await;

        assert!(report.is_ok());
        assert!((report.assessment.score - 7.7).abs() < 1e-9);
        assert_eq!(report.assessment.sample_fraction, SampleFraction::Medium);
    }

    #[tokio::test]
    async fn test_unknown_assessor_falls_back() {
        let source = source();
        let evaluator = RiskEvaluator::new(&source, RiskWeights::default());

        let report = evaluator.evaluate("ghost").await;

        assert_eq!(report.error.as_deref(), Some(RISK_FAILURE_MESSAGE));
        assert_eq!(report.assessment.score, 0.0);
        assert_eq!(report.assessment.sample_fraction, SampleFraction::Low);
    }

    #[tokio::test]
    async fn test_invalid_profile_falls_back() {
        let source = source();
        let evaluator = RiskEvaluator::new(&source, RiskWeights::default());
        let report = evaluator.evaluate("broken").await;
        assert!(!report.is_ok());
        assert_eq!(report.assessment, RiskAssessment::default());
    }

    #[tokio::test]
    async fn test_plan_uses_assessed_fraction() {
        let source = source();
        let evaluator = RiskEvaluator::new(&source, RiskWeights::default());

        let (report, plan) = evaluator.plan("a-1", 10).await;
        assert_eq!(report.assessment.sample_fraction, SampleFraction::Medium);
        assert_eq!(plan.len(), 5);

        let (_, fallback) = evaluator.plan("ghost", 10).await;
        assert_eq!(fallback.len(), 2);
    }

    #[test]
    fn test_report_json_shape() -> anyhow::Result<()> {
        let report = RiskReport {
            assessor_id: "a-1".into(),
            assessment: RiskAssessment {
                score: 7.7,
                sample_fraction: SampleFraction::Medium,
            },
            error: None,
        };
        let json = serde_json::to_value(&report)?;
        assert_eq!(json["score"], 7.7);
        assert_eq!(json["sample_fraction"], "medium");
        assert!(json.get("error").is_none());
        Ok(())
    }
}
