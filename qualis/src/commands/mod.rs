// qualis/src/commands/mod.rs

pub mod generate;
pub mod inspect;
pub mod risk;
pub mod sample;

use std::path::{Path, PathBuf};

use qualis_core::application::{ImportSession, ImportStatus};
use qualis_core::infrastructure::adapters::YamlAssessorSource;
use qualis_core::infrastructure::config::ProjectConfig;

const DEFAULT_ASSESSORS_FILE: &str = "assessors.yaml";

/// Session primed with the project's mapping defaults and keywords.
pub(crate) fn import_session(config: &ProjectConfig) -> anyhow::Result<ImportSession> {
    let keywords = config.mapping.keywords.compile()?;
    Ok(ImportSession::new(config.mapping.defaults.clone(), keywords))
}

/// Loads a recipient file, turning the non-loaded statuses into CLI errors.
pub(crate) async fn load_recipients(session: &mut ImportSession, file: &Path) -> anyhow::Result<()> {
    match session.load_file(file).await {
        ImportStatus::Loaded { rows, .. } => {
            println!("📥 Loaded {} recipients from '{}'", rows, file.display());
            Ok(())
        }
        ImportStatus::Empty => anyhow::bail!("❌ No recipients found in '{}'", file.display()),
        ImportStatus::Failed { reason } => {
            anyhow::bail!("❌ Could not read '{}': {}", file.display(), reason)
        }
    }
}

/// Flag first, then the config (relative to the project), then the default file.
pub(crate) fn assessor_source(
    project_dir: &Path,
    config: &ProjectConfig,
    flag: Option<PathBuf>,
) -> YamlAssessorSource {
    let path = flag.unwrap_or_else(|| {
        project_dir.join(config.assessors.as_deref().unwrap_or(DEFAULT_ASSESSORS_FILE))
    });
    YamlAssessorSource::new(path)
}
