// qualis-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualisError {
    // --- DOMAIN ERRORS (unknown recipients, assessors, invalid profiles) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing, templating) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

