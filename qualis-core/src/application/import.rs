// qualis-core/src/application/import.rs
//
// USE CASE: load recipients (uploaded file or API-style list) and keep the
// column mapping in sync.

use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::domain::roster::{
    CellValue, ColumnMapping, CompiledKeywords, Inference, RowRecord, Roster,
};
use crate::infrastructure::import::{ImportFormat, read_roster};

/// What happened to an upload. Import never fails towards the caller:
/// problems are logged and reported here, prior data stays loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportStatus {
    Loaded { rows: usize, inference: Inference },
    Empty,
    Failed { reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    roster: Roster,
    mapping: ColumnMapping,
    keywords: CompiledKeywords,
    is_loading: bool,
}

impl ImportSession {
    pub fn new(mapping: ColumnMapping, keywords: CompiledKeywords) -> Self {
        Self {
            roster: Roster::default(),
            mapping,
            keywords,
            is_loading: false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// User override of the detected mapping.
    pub fn set_mapping(&mut self, mapping: ColumnMapping) {
        self.mapping = mapping;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Parses an uploaded buffer. On success the roster is replaced and the
    /// mapping re-inferred; an empty or unreadable upload changes nothing.
    #[instrument(skip(self, bytes), fields(bytes.len = bytes.len()))]
    pub fn load(&mut self, bytes: &[u8], format: ImportFormat) -> ImportStatus {
        self.is_loading = true;
        let status = match read_roster(bytes, format) {
            Ok(roster) if roster.is_empty() => {
                warn!("Uploaded file contains no rows");
                ImportStatus::Empty
            }
            Ok(roster) => {
                let inference = self.mapping.infer(roster.columns(), &self.keywords);
                let rows = roster.len();
                self.roster = roster;
                info!(rows, "Recipients imported");
                ImportStatus::Loaded { rows, inference }
            }
            Err(e) => {
                error!(error = %e, "Error processing uploaded file");
                ImportStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };
        self.is_loading = false;
        status
    }

    /// Reads the file asynchronously, then behaves like [`Self::load`].
    /// The format comes from the extension, or the content when unknown.
    pub async fn load_file(&mut self, path: &Path) -> ImportStatus {
        self.is_loading = true;
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(path = ?path, error = %e, "Error reading uploaded file");
                self.is_loading = false;
                return ImportStatus::Failed {
                    reason: e.to_string(),
                };
            }
        };
        match ImportFormat::detect(Some(path), &bytes) {
            Ok(format) => self.load(&bytes, format),
            Err(e) => {
                error!(path = ?path, error = %e, "Unsupported upload");
                self.is_loading = false;
                ImportStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// API-style source: rows carry their own ids and the mapping is left
    /// as configured (no inference).
    pub fn use_records(&mut self, rows: Vec<RowRecord>) {
        info!(rows = rows.len(), "Recipients loaded from record list");
        self.roster = Roster::new(rows);
    }
}

/// Built-in demo recipients, identified by their `id` column.
pub fn sample_recipients() -> Vec<RowRecord> {
    let people = [
        (1.0, "John Doe", "john@example.com", "Advanced React"),
        (2.0, "Jane Smith", "jane@example.com", "Node.js Fundamentals"),
        (3.0, "Alex Johnson", "alex@example.com", "UI/UX Design"),
    ];
    people
        .into_iter()
        .filter_map(|(id, name, email, course)| {
            RowRecord::with_id_column([
                ("id", CellValue::Number(id)),
                ("fullName", CellValue::from(name)),
                ("email", CellValue::from(email)),
                ("course", CellValue::from(course)),
            ])
        })
        .collect()
}
