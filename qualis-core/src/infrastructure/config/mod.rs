// qualis-core/src/infrastructure/config/mod.rs

pub mod project;

pub use project::{MappingConfig, ProjectConfig, RiskConfig, load_project_config};
