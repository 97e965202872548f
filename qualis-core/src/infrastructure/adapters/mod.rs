pub mod assessors;

pub use assessors::{AssessorRecord, InMemoryAssessorSource, YamlAssessorSource};
