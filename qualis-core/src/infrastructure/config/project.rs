// qualis-core/src/infrastructure/config/project.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::quality::RiskWeights;
use crate::domain::roster::{ColumnMapping, MappingKeywords};
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["qualis_project_conf.yaml", "qualis.yaml"];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    /// Assessor data file, relative to the project directory.
    #[serde(default)]
    pub assessors: Option<String>,

    #[serde(default)]
    pub risk: RiskConfig,

    #[serde(default)]
    pub mapping: MappingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RiskConfig {
    #[serde(default)]
    pub weights: RiskWeights,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MappingConfig {
    #[serde(default)]
    pub keywords: MappingKeywords,
    #[serde(default)]
    pub defaults: ColumnMapping,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            target_path: default_target_path(),
            assessors: None,
            risk: RiskConfig::default(),
            mapping: MappingConfig::default(),
        }
    }
}

fn default_name() -> String {
    "qualis".to_string()
}
fn default_target_path() -> String {
    "target".to_string()
}

// --- LOADER ---

/// Loads `qualis.yaml` from the project directory. The file is optional:
/// without it every setting takes its default.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let mut config = match find_main_config(project_dir) {
        Some(config_path) => {
            info!(path = ?config_path, "Loading project configuration");
            let content = fs::read_to_string(&config_path)?;
            serde_yaml::from_str::<ProjectConfig>(&content)?
        }
        None => {
            info!(dir = ?project_dir, "No project configuration found, using defaults");
            ProjectConfig::default()
        }
    };

    config.risk.weights.validate().map_err(|e| {
        InfrastructureError::ConfigError(format!("Invalid risk weights: {}", e))
    })?;
    config
        .mapping
        .keywords
        .compile()
        .map_err(|e| InfrastructureError::ConfigError(format!("Invalid mapping keyword: {}", e)))?;

    // Layering: QUALIS_TARGET_PATH=/tmp/out qualis generate ...
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("QUALIS_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Some(val) = lookup("QUALIS_ASSESSORS") {
        info!(old = ?config.assessors, new = ?val, "Overriding assessor source via ENV");
        config.assessors = Some(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = load_project_config(dir.path())?;
        assert_eq!(config.name, "qualis");
        assert_eq!(config.risk.weights, RiskWeights::default());
        assert_eq!(config.mapping.defaults.name_column, "fullName");
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("qualis.yaml"),
            "name: academy\nrisk:\n  weights:\n    experience: 0.1\nmapping:\n  keywords:\n    name: [learner]\n",
        )?;
        let config = load_project_config(dir.path())?;

        assert_eq!(config.name, "academy");
        assert_eq!(config.risk.weights.experience, 0.1);
        assert_eq!(config.risk.weights.discrepancy_rate, 0.4);
        assert_eq!(config.mapping.keywords.name, vec!["learner".to_string()]);
        assert_eq!(config.mapping.keywords.course.len(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_weight_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("qualis.yaml"),
            "risk:\n  weights:\n    learner_feedback: 2.0\n",
        )?;
        let res = load_project_config(dir.path());
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ProjectConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            "QUALIS_TARGET_PATH" => Some("/tmp/out".to_string()),
            _ => None,
        });
        assert_eq!(config.target_path, "/tmp/out");
        assert_eq!(config.assessors, None);
    }
}
