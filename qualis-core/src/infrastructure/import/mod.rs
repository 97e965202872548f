// qualis-core/src/infrastructure/import/mod.rs
//
// Upload buffer -> Roster. First sheet only, row 1 is the header.

mod delimited;
mod format;
mod spreadsheet;

pub use format::ImportFormat;

use tracing::{debug, instrument};

use crate::domain::roster::Roster;
use crate::infrastructure::error::InfrastructureError;

#[instrument(skip(bytes), fields(bytes.len = bytes.len()))]
pub fn read_roster(bytes: &[u8], format: ImportFormat) -> Result<Roster, InfrastructureError> {
    let roster = match format {
        ImportFormat::Delimited { delimiter } => delimited::read(bytes, delimiter)?,
        ImportFormat::Spreadsheet => spreadsheet::read(bytes)?,
    };
    debug!(rows = roster.len(), columns = roster.columns().len(), "Roster parsed");
    Ok(roster)
}
