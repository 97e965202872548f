// qualis-core/src/domain/certificate/generator.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::certificate::CertificateTemplate;
use crate::domain::error::DomainError;
use crate::domain::roster::{ResolvedMapping, Roster, Selection};

/// One certificate: the template plus a recipient's own values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    #[serde(flatten)]
    pub template: CertificateTemplate,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub course_name: String,
}

impl CertificateRecord {
    pub fn blank(template: CertificateTemplate) -> Self {
        Self {
            template,
            recipient_name: String::new(),
            course_name: String::new(),
        }
    }
}

impl Default for CertificateRecord {
    fn default() -> Self {
        Self::blank(CertificateTemplate::default())
    }
}

/// Produces one record per selected id, in selection order.
///
/// A mapped date column overrides the template's completion date; missing
/// cells become empty strings. An id absent from the roster aborts the
/// batch so callers never see a partial result.
pub fn generate_batch(
    roster: &Roster,
    selection: &Selection,
    template: &CertificateTemplate,
    mapping: ResolvedMapping<'_>,
) -> Result<Vec<CertificateRecord>, DomainError> {
    selection
        .ids()
        .iter()
        .map(|id| -> Result<CertificateRecord, DomainError> {
            let row = roster.get(*id).ok_or(DomainError::RecipientNotFound(*id))?;
            let fields = mapping.extract(row);

            let mut record = CertificateRecord::blank(template.clone());
            record.recipient_name = fields.name;
            record.course_name = fields.course;
            if let Some(date) = fields.date {
                record.template.completion_date = date;
            }

            debug!(row = %id, recipient = %record.recipient_name, "Certificate generated");
            Ok(record)
        })
        .collect()
}
