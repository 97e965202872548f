// qualis-core/src/domain/quality/risk.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::domain::error::DomainError;

pub const MAX_SCORE: f64 = 10.0;
pub const HIGH_RISK_THRESHOLD: f64 = 8.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 5.0;

/// Historical attributes of one assessor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub experience_months: f64,
    pub discrepancy_rate: f64,
    pub compliance_issues: f64,
    pub learner_feedback: f64,
}

impl RiskProfile {
    pub fn check(&self, assessor: &str) -> Result<(), DomainError> {
        let fields = [
            ("experience_months", self.experience_months),
            ("discrepancy_rate", self.discrepancy_rate),
            ("compliance_issues", self.compliance_issues),
            ("learner_feedback", self.learner_feedback),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DomainError::InvalidProfile {
                    assessor: assessor.to_string(),
                    reason: format!("{} is not a finite number ({})", name, value),
                });
            }
        }
        Ok(())
    }
}

/// Weight of each attribute in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RiskWeights {
    #[validate(range(min = 0.0, max = 1.0))]
    pub experience: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub discrepancy_rate: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub compliance_issues: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub learner_feedback: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            experience: 0.3,
            discrepancy_rate: 0.4,
            compliance_issues: 0.2,
            learner_feedback: 0.1,
        }
    }
}

impl RiskWeights {
    /// Unbounded weighted sum. Feedback is inverted: 10 is the best score.
    pub fn raw_score(&self, p: &RiskProfile) -> f64 {
        p.experience_months * self.experience
            + p.discrepancy_rate * self.discrepancy_rate
            + p.compliance_issues * self.compliance_issues
            + (MAX_SCORE - p.learner_feedback) * self.learner_feedback
    }
}

/// Share of an assessor's work to sample. Only three values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleFraction {
    #[default]
    Low, // 20%
    Medium, // 50%
    High,   // 70%
}

impl SampleFraction {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn percent(&self) -> u32 {
        match self {
            Self::Low => 20,
            Self::Medium => 50,
            Self::High => 70,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Low => 0.2,
            Self::Medium => 0.5,
            Self::High => 0.7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for SampleFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RiskAssessment {
    /// Rounded to one decimal for display, within [0, 10]. The fraction is
    /// taken from the unrounded value.
    pub score: f64,
    pub sample_fraction: SampleFraction,
}

impl RiskAssessment {
    pub fn compute(profile: &RiskProfile, weights: &RiskWeights) -> Self {
        let bounded = bound(weights.raw_score(profile));
        Self {
            score: (bounded * 10.0).round() / 10.0,
            sample_fraction: SampleFraction::from_score(bounded),
        }
    }
}

/// Clamps to [0, 10]; NaN counts as no risk.
fn bound(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_SCORE)
}
