// qualis-core/src/infrastructure/import/spreadsheet.rs

use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto_from_rs};
use chrono::NaiveTime;
use tracing::debug;

use crate::domain::roster::{CellValue, Roster};
use crate::infrastructure::error::ImportError;

pub(super) fn read(bytes: &[u8]) -> Result<Roster, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    if let Some(name) = workbook.sheet_names().first() {
        debug!(sheet = %name, "Reading first worksheet");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoWorksheet)??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(header_text).collect(),
        None => return Ok(Roster::default()),
    };

    let table: Vec<Vec<Option<CellValue>>> =
        rows.map(|row| row.iter().map(cell_value).collect()).collect();

    Ok(Roster::from_table(&headers, table))
}

fn header_text(cell: &Data) -> String {
    cell_value(cell).map(|v| v.to_string()).unwrap_or_default()
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => CellValue::parse(s).map(|_| CellValue::Text(s.clone())),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        Data::DateTime(dt) => Some(CellValue::Text(date_text(dt))),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => {
            debug!(error = ?e, "Skipping cell with formula error");
            None
        }
    }
}

/// Date cells as ISO text; durations and out-of-range serials keep the raw serial.
fn date_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(d) if dt.is_datetime() && d.time() == NaiveTime::MIN => {
            d.format("%Y-%m-%d").to_string()
        }
        Some(d) if dt.is_datetime() => d.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => dt.to_string(),
    }
}
