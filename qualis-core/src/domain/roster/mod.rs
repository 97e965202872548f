// qualis-core/src/domain/roster/mod.rs

pub mod mapping;
pub mod selection;

pub use mapping::{
    ColumnMapping, CompiledKeywords, Inference, MappingKeywords, RecipientFields, ResolvedMapping,
};
pub use selection::Selection;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a row, independent of where the row came from.
///
/// API-style lists carry their own numeric `id`; imported files get the
/// row's position at import time. Either way the id is fixed once the
/// roster exists, so a selection survives filtering and re-sorting of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single spreadsheet cell. Empty cells are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Interprets a raw textual cell the way spreadsheet importers do:
    /// blank is absent, finite numerics become numbers, the rest stays text.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Self::Number(n)),
            _ => Some(Self::Text(raw.to_string())),
        }
    }

    pub fn as_id(&self) -> Option<RowId> {
        match self {
            Self::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Some(RowId(*n as u64)),
            Self::Text(s) => s.trim().parse::<u64>().ok().map(RowId),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 1.0 prints as "1", like the spreadsheet shows it
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One uploaded row: column name to cell value, in header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRecord {
    pub id: RowId,
    cells: Vec<(String, CellValue)>,
}

impl RowRecord {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            cells: Vec::new(),
        }
    }

    /// Builds a record from column/value pairs. A later duplicate column
    /// overwrites the earlier value.
    pub fn from_pairs<K, V, I>(id: RowId, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::new(id);
        for (k, v) in pairs {
            record.insert(k, v);
        }
        record
    }

    /// Builds an API-style record whose identity is its own `id` column.
    /// Returns `None` when the column is absent or not a non-negative integer.
    pub fn with_id_column<K, V, I>(pairs: I) -> Option<Self>
    where
        K: Into<String>,
        V: Into<CellValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::from_pairs(RowId(0), pairs);
        record.id = record.get("id")?.as_id()?;
        Some(record)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// The rows of one import, plus the column set offered for mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    rows: Vec<RowRecord>,
    columns: Vec<String>,
}

impl Roster {
    /// Column set = keys of the first record; later rows may carry more
    /// (or fewer) columns without affecting it.
    pub fn new(rows: Vec<RowRecord>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.columns().map(str::to_string).collect())
            .unwrap_or_default();
        Self { rows, columns }
    }

    /// Builds a roster from a header row and raw cells, assigning positional ids.
    ///
    /// Blank headers drop their column, rows without any value are skipped.
    pub fn from_table<I>(headers: &[String], rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Option<CellValue>>>,
    {
        let mut records = Vec::new();
        for cells in rows {
            let mut record = RowRecord::new(RowId(records.len() as u64));
            for (header, cell) in headers.iter().zip(cells) {
                if header.trim().is_empty() {
                    continue;
                }
                if let Some(value) = cell {
                    record.insert(header.trim(), value);
                }
            }
            if !record.is_empty() {
                records.push(record);
            }
        }
        Self::new(records)
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, id: RowId) -> Option<&RowRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().map(|r| r.id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
