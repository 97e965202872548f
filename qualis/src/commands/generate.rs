// qualis/src/commands/generate.rs
//
// USE CASE: Bulk certificate generation (import -> select -> generate -> export).

use anyhow::Context;
use std::fs;
use std::path::Path;

use qualis_core::application::{GenerationSession, sample_recipients};
use qualis_core::domain::certificate::{CertificateDesigner, CertificateTemplate};
use qualis_core::domain::roster::RowId;
use qualis_core::infrastructure::config::load_project_config;
use qualis_core::infrastructure::renderer::JinjaRenderer;

use super::{import_session, load_recipients};
use crate::cli::GenerateArgs;

const DEFAULT_OUTPUT_FILE: &str = "certificates.json";

pub async fn execute(project_dir: &Path, args: GenerateArgs) -> anyhow::Result<()> {
    // A. Config & recipients
    let config = load_project_config(project_dir)?;
    let mut import = import_session(&config)?;
    match &args.file {
        Some(file) => load_recipients(&mut import, file).await?,
        None => {
            import.use_records(sample_recipients());
            println!("📥 Using {} sample recipients", import.roster().len());
        }
    }

    // B. Manual mapping overrides win over detection
    let mut mapping = import.mapping().clone();
    if let Some(col) = args.name_column {
        mapping.name_column = col;
    }
    if let Some(col) = args.course_column {
        mapping.course_column = col;
    }
    if args.date_column.is_some() {
        mapping.date_column = args.date_column;
    }
    import.set_mapping(mapping);

    // C. Template
    let template = match &args.template {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            serde_yaml::from_str::<CertificateTemplate>(&content)
                .with_context(|| format!("Invalid template {}", path.display()))?
        }
        None => CertificateTemplate::default(),
    };
    let mut session = GenerationSession::new(CertificateDesigner::new(template));
    session.capture_template();

    // D. Selection
    if args.all {
        session.selection_mut().toggle_all(import.roster().ids());
    } else {
        for id in args.select {
            session.selection_mut().select(RowId(id));
        }
    }
    if session.selection().is_empty() {
        println!("⚠️  No recipients selected. Use --select <ids> or --all.");
        return Ok(());
    }

    // E. Generate & preview
    let count = session.generate(import.roster(), import.mapping())?;
    println!("🎓 Generated {} certificates", count);

    let renderer = JinjaRenderer::new();
    println!("\n--- Preview (1/{}) ---", count);
    println!("{}", session.render_preview(&renderer)?);
    println!("----------------------\n");

    // F. Export
    let output = args.output.unwrap_or_else(|| {
        project_dir
            .join(&config.target_path)
            .join(DEFAULT_OUTPUT_FILE)
    });
    session.export_batch(&output)?;
    println!("✨ Certificates written to {}", output.display());

    Ok(())
}
