// qualis/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug qualis generate ... to see the details.
    // Logs go to stderr so stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    match cli.command {
        Commands::Inspect { file, limit } => {
            commands::inspect::execute(&project_dir, &file, limit).await
        }
        Commands::Generate(args) => commands::generate::execute(&project_dir, args).await,
        Commands::Risk {
            assessor_id,
            assessors,
        } => commands::risk::execute(&project_dir, &assessor_id, assessors).await,
        Commands::Sample {
            assessor_id,
            population,
            assessors,
        } => commands::sample::execute(&project_dir, &assessor_id, population, assessors).await,
    }
}
