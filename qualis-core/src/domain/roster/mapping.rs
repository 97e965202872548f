// qualis-core/src/domain/roster/mapping.rs

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CellValue, RowRecord};

/// Which columns feed the recipient name, course and completion date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub name_column: String,
    pub course_column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_column: Option<String>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name_column: "fullName".to_string(),
            course_column: "course".to_string(),
            date_column: None,
        }
    }
}

/// Keyword sets used to guess the mapping from column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingKeywords {
    pub name: Vec<String>,
    pub course: Vec<String>,
    pub date: Vec<String>,
}

impl Default for MappingKeywords {
    fn default() -> Self {
        Self {
            name: vec!["name".into(), "fullname".into(), "student".into()],
            course: vec!["course".into(), "subject".into(), "class".into()],
            date: vec!["date".into()],
        }
    }
}

impl MappingKeywords {
    pub fn compile(&self) -> Result<CompiledKeywords, regex::Error> {
        Ok(CompiledKeywords {
            name: keyword_regex(&self.name)?,
            course: keyword_regex(&self.course)?,
            date: keyword_regex(&self.date)?,
        })
    }
}

// An empty keyword list matches nothing.
fn keyword_regex(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
}

#[derive(Debug, Clone)]
pub struct CompiledKeywords {
    name: Option<Regex>,
    course: Option<Regex>,
    date: Option<Regex>,
}

impl Default for CompiledKeywords {
    fn default() -> Self {
        // Built-in keywords are plain words, escaping keeps them valid.
        Self {
            name: first_valid(&MappingKeywords::default().name),
            course: first_valid(&MappingKeywords::default().course),
            date: first_valid(&MappingKeywords::default().date),
        }
    }
}

fn first_valid(keywords: &[String]) -> Option<Regex> {
    keyword_regex(keywords).ok().flatten()
}

fn find_column<'a>(columns: &'a [String], pattern: Option<&Regex>) -> Option<&'a String> {
    let pattern = pattern?;
    columns.iter().find(|c| pattern.is_match(c))
}

/// Outcome of auto-detection, one flag per field that was changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inference {
    pub name: bool,
    pub course: bool,
    pub date: bool,
}

impl ColumnMapping {
    /// Scans the column set and adopts the first match for each field.
    /// A field with no match keeps its current selection.
    pub fn infer(&mut self, columns: &[String], keywords: &CompiledKeywords) -> Inference {
        let mut inference = Inference::default();

        if let Some(col) = find_column(columns, keywords.name.as_ref()) {
            self.name_column = col.clone();
            inference.name = true;
        }
        if let Some(col) = find_column(columns, keywords.course.as_ref()) {
            self.course_column = col.clone();
            inference.course = true;
        }
        if let Some(col) = find_column(columns, keywords.date.as_ref()) {
            self.date_column = Some(col.clone());
            inference.date = true;
        }

        debug!(
            name = %self.name_column,
            course = %self.course_column,
            date = ?self.date_column,
            "Column mapping inferred"
        );
        inference
    }

    /// Freezes the mapping for one generation run.
    pub fn resolve(&self) -> ResolvedMapping<'_> {
        ResolvedMapping {
            name: &self.name_column,
            course: &self.course_column,
            date: self.date_column.as_deref(),
        }
    }
}

/// Mapped values of one row. Missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientFields {
    pub name: String,
    pub course: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedMapping<'a> {
    pub name: &'a str,
    pub course: &'a str,
    pub date: Option<&'a str>,
}

impl ResolvedMapping<'_> {
    pub fn extract(&self, row: &RowRecord) -> RecipientFields {
        RecipientFields {
            name: cell_or_empty(row, self.name),
            course: cell_or_empty(row, self.course),
            date: self.date.map(|col| cell_or_empty(row, col)),
        }
    }
}

fn cell_or_empty(row: &RowRecord, column: &str) -> String {
    match row.get(column) {
        Some(CellValue::Text(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => {
            debug!(row = %row.id, column, "Mapped cell missing, using empty value");
            String::new()
        }
    }
}
