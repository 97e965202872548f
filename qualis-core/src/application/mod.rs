pub mod generation;
pub mod import;
pub mod ports;
pub mod risk;

pub use generation::{BatchExport, GenerationSession};
pub use import::{ImportSession, ImportStatus, sample_recipients};
pub use risk::{RiskEvaluator, RiskReport};
