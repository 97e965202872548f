// qualis-core/src/infrastructure/import/format.rs

use std::fmt;
use std::path::Path;

use crate::infrastructure::error::ImportError;

const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const CFB_MAGIC: [u8; 4] = [0xD0, 0xCF, 0x11, 0xE0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Delimited { delimiter: u8 },
    Spreadsheet,
}

impl ImportFormat {
    pub const CSV: Self = Self::Delimited { delimiter: b',' };
    pub const TSV: Self = Self::Delimited { delimiter: b'\t' };

    /// Extension first, content sniffing as fallback.
    pub fn detect(path: Option<&Path>, bytes: &[u8]) -> Result<Self, ImportError> {
        let ext = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(Self::CSV),
            Some("tsv") | Some("tab") => Ok(Self::TSV),
            Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
                Ok(Self::Spreadsheet)
            }
            Some("txt") | None => Ok(Self::sniff(bytes)),
            Some(other) => {
                // Unknown extension: trust the content if it looks like a workbook
                match Self::sniff(bytes) {
                    Self::Spreadsheet => Ok(Self::Spreadsheet),
                    _ => Err(ImportError::UnsupportedFormat(other.to_string())),
                }
            }
        }
    }

    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&ZIP_MAGIC) || bytes.starts_with(&CFB_MAGIC) {
            return Self::Spreadsheet;
        }
        let first_line = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
        let tabs = first_line.iter().filter(|b| **b == b'\t').count();
        let commas = first_line.iter().filter(|b| **b == b',').count();
        let semicolons = first_line.iter().filter(|b| **b == b';').count();

        let delimiter = if tabs > commas && tabs >= semicolons {
            b'\t'
        } else if semicolons > commas {
            b';'
        } else {
            b','
        };
        Self::Delimited { delimiter }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimited { delimiter: b'\t' } => f.write_str("tsv"),
            Self::Delimited { delimiter } => write!(f, "delimited ('{}')", *delimiter as char),
            Self::Spreadsheet => f.write_str("spreadsheet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() -> anyhow::Result<()> {
        assert_eq!(ImportFormat::detect(Some(Path::new("a.CSV")), b"")?, ImportFormat::CSV);
        assert_eq!(ImportFormat::detect(Some(Path::new("a.tsv")), b"")?, ImportFormat::TSV);
        assert_eq!(
            ImportFormat::detect(Some(Path::new("plan.xlsx")), b"")?,
            ImportFormat::Spreadsheet
        );
        Ok(())
    }

    #[test]
    fn test_sniff_content() {
        assert_eq!(ImportFormat::sniff(b"PK\x03\x04rest"), ImportFormat::Spreadsheet);
        assert_eq!(
            ImportFormat::sniff(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1]),
            ImportFormat::Spreadsheet
        );
        assert_eq!(ImportFormat::sniff(b"name\tcourse\nA\tB"), ImportFormat::TSV);
        assert_eq!(
            ImportFormat::sniff(b"name;course\nA;B"),
            ImportFormat::Delimited { delimiter: b';' }
        );
        assert_eq!(ImportFormat::sniff(b"name,course"), ImportFormat::CSV);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let res = ImportFormat::detect(Some(Path::new("photo.png")), b"\x89PNG");
        assert!(matches!(res, Err(ImportError::UnsupportedFormat(ext)) if ext == "png"));
    }
}
