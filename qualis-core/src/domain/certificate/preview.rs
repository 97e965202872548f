// qualis-core/src/domain/certificate/preview.rs

use super::CertificateRecord;

/// Current-record pointer over a generated batch.
///
/// Always points at a valid record: an empty batch has no cursor.
/// Moves stop at both ends, there is no wraparound.
#[derive(Debug, Clone)]
pub struct PreviewCursor {
    records: Vec<CertificateRecord>,
    index: usize,
}

impl PreviewCursor {
    pub fn new(records: Vec<CertificateRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self { records, index: 0 })
    }

    pub fn current(&self) -> &CertificateRecord {
        &self.records[self.index]
    }

    /// Advances one record. Returns the new current record, or `None`
    /// when already on the last one.
    pub fn next(&mut self) -> Option<&CertificateRecord> {
        if self.index + 1 >= self.records.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn previous(&mut self) -> Option<&CertificateRecord> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn rewind(&mut self) -> &CertificateRecord {
        self.index = 0;
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn records(&self) -> &[CertificateRecord] {
        &self.records
    }
}
