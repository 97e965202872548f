// qualis/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qualis")]
#[command(about = "Bulk certificate generation & risk-based assessment sampling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (where qualis.yaml lives)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔍 Shows the columns, row count and detected mapping of a recipient file
    Inspect {
        /// CSV / TSV / XLSX / XLS / ODS file
        file: PathBuf,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// 🎓 Generates one certificate per selected recipient
    Generate(GenerateArgs),

    /// 📊 Computes an assessor's risk score and recommended sample size
    Risk {
        assessor_id: String,

        /// Assessor data file (default: from qualis.yaml, else assessors.yaml)
        #[arg(long)]
        assessors: Option<PathBuf>,
    },

    /// 🎯 Draws the learner records to review for an assessor
    Sample {
        assessor_id: String,

        /// Number of learner records assessed
        #[arg(long, value_parser = parse_population)]
        population: usize,

        #[arg(long)]
        assessors: Option<PathBuf>,
    },
}

/// Upper bound for `--population`; every drawn position is held in memory.
const MAX_POPULATION: usize = 1_000_000;

fn parse_population(value: &str) -> Result<usize, String> {
    let population: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a record count", value))?;
    if population > MAX_POPULATION {
        return Err(format!("at most {} learner records", MAX_POPULATION));
    }
    Ok(population)
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Recipient file. Without it the built-in sample recipients are used.
    #[arg(required_unless_present = "sample")]
    pub file: Option<PathBuf>,

    /// Use the built-in sample recipients
    #[arg(long, conflicts_with = "file")]
    pub sample: bool,

    /// Column holding the recipient name (overrides detection)
    #[arg(long)]
    pub name_column: Option<String>,

    /// Column holding the course name (overrides detection)
    #[arg(long)]
    pub course_column: Option<String>,

    /// Column holding the completion date (overrides detection)
    #[arg(long)]
    pub date_column: Option<String>,

    /// Certificate template (YAML)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Row ids to generate, in order (ex: "2,0,5")
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub select: Vec<u64>,

    /// Generate for every recipient
    #[arg(long)]
    pub all: bool,

    /// Output file (default: <target-path>/certificates.json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
