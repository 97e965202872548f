// qualis-core/src/infrastructure/adapters/assessors.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::quality::RiskProfile;
use crate::error::QualisError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::AssessorSource;

/// One entry of `assessors.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessorRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub profile: RiskProfile,
}

#[derive(Debug, Deserialize)]
struct AssessorFile {
    assessors: Vec<AssessorRecord>,
}

// --- IN MEMORY ---

#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessorSource {
    profiles: HashMap<String, RiskProfile>,
}

impl InMemoryAssessorSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, profile: RiskProfile) -> Self {
        self.profiles.insert(id.into(), profile);
        self
    }
}

#[async_trait]
impl AssessorSource for InMemoryAssessorSource {
    async fn fetch(&self, assessor_id: &str) -> Result<RiskProfile, QualisError> {
        self.profiles
            .get(assessor_id)
            .copied()
            .ok_or_else(|| DomainError::AssessorNotFound(assessor_id.to_string()).into())
    }
}

// --- YAML FILE ---

/// Reads the file on every fetch, like a request against a live source would.
#[derive(Debug, Clone)]
pub struct YamlAssessorSource {
    path: PathBuf,
}

impl YamlAssessorSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load_all(&self) -> Result<Vec<AssessorRecord>, InfrastructureError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file: AssessorFile = serde_yaml::from_str(&content)?;
        Ok(file.assessors)
    }
}

#[async_trait]
impl AssessorSource for YamlAssessorSource {
    async fn fetch(&self, assessor_id: &str) -> Result<RiskProfile, QualisError> {
        debug!(path = ?self.path, assessor_id, "Fetching assessor profile");
        let records = self.load_all().await?;
        records
            .into_iter()
            .find(|r| r.id == assessor_id)
            .map(|r| r.profile)
            .ok_or_else(|| DomainError::AssessorNotFound(assessor_id.to_string()).into())
    }
}
