pub mod risk;
pub mod sampling;

// Re-exports
pub use risk::{RiskAssessment, RiskProfile, RiskWeights, SampleFraction};
pub use sampling::SamplingPlan;
