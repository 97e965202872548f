// qualis-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ImportError {
    #[error("CSV Parsing Error: {0}")]
    #[diagnostic(
        code(qualis::infra::import::csv),
        help("Check the delimiter and that quoted fields are closed.")
    )]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet Error: {0}")]
    #[diagnostic(
        code(qualis::infra::import::spreadsheet),
        help("Only .xlsx, .xlsm, .xlsb, .xls and .ods workbooks can be read.")
    )]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheet")]
    #[diagnostic(code(qualis::infra::import::no_sheet))]
    NoWorksheet,

    #[error("Unsupported file format: {0}")]
    #[diagnostic(
        code(qualis::infra::import::format),
        help("Upload a spreadsheet (.xlsx, .xls, .ods) or delimited text (.csv, .tsv).")
    )]
    UnsupportedFormat(String),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- IMPORT (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Import(#[from] ImportError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(qualis::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(qualis::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(qualis::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(qualis::infra::config))]
    ConfigError(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(qualis::infra::template),
        help("Check the Jinja syntax ({{ ... }}) of the preview template.")
    )]
    TemplateError(#[from] minijinja::Error),
}

// Shortcuts so `?` works directly on reader calls
impl From<csv::Error> for InfrastructureError {
    fn from(err: csv::Error) -> Self {
        InfrastructureError::Import(ImportError::Csv(err))
    }
}

impl From<calamine::Error> for InfrastructureError {
    fn from(err: calamine::Error) -> Self {
        InfrastructureError::Import(ImportError::Spreadsheet(err))
    }
}
