// qualis-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::roster::RowId;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Recipient {0} is not part of the loaded roster")]
    #[diagnostic(
        code(qualis::domain::recipient_not_found),
        help("The selection refers to a row that is no longer loaded. Re-import the file or clear the selection.")
    )]
    RecipientNotFound(RowId),

    #[error("Assessor '{0}' not found")]
    #[diagnostic(code(qualis::domain::assessor_not_found))]
    AssessorNotFound(String),

    #[error("Invalid risk profile for assessor '{assessor}': {reason}")]
    #[diagnostic(
        code(qualis::domain::invalid_profile),
        help("All four risk attributes must be finite numbers.")
    )]
    InvalidProfile { assessor: String, reason: String },
}
