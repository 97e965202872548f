// qualis-core/src/infrastructure/import/delimited.rs

use crate::domain::roster::{CellValue, Roster};
use crate::infrastructure::error::ImportError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(super) fn read(bytes: &[u8], delimiter: u8) -> Result<Roster, ImportError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::parse).collect::<Vec<_>>());
    }

    Ok(Roster::from_table(&headers, rows))
}
