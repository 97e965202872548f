// qualis-core/src/application/generation.rs
//
// USE CASE: bulk certificate generation and batch preview.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::application::ports::TemplateEngine;
use crate::domain::certificate::{
    CertificateAction, CertificateDesigner, CertificateRecord, CertificateTemplate,
    PreviewCursor, generate_batch,
};
use crate::domain::roster::{ColumnMapping, RowId, Roster, Selection};
use crate::error::QualisError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::write_json;
use crate::infrastructure::renderer::PREVIEW_TEMPLATE;

#[derive(Debug, Serialize)]
pub struct BatchExport<'a> {
    pub generated_at: String,
    pub count: usize,
    pub certificates: &'a [CertificateRecord],
}

#[derive(Debug, Clone, Default)]
pub struct GenerationSession {
    designer: CertificateDesigner,
    template: Option<CertificateTemplate>,
    selection: Selection,
    batch: Option<PreviewCursor>,
    is_generating: bool,
}

impl GenerationSession {
    pub fn new(designer: CertificateDesigner) -> Self {
        Self {
            designer,
            ..Self::default()
        }
    }

    pub fn designer(&self) -> &CertificateDesigner {
        &self.designer
    }

    /// Edits go through the designer's single update function.
    pub fn apply(&mut self, action: CertificateAction) {
        self.designer.apply(action);
    }

    /// Freezes the current design as the base template of the next batches.
    pub fn capture_template(&mut self) -> &CertificateTemplate {
        self.template.insert(self.designer.capture_template())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn toggle(&mut self, id: RowId) -> bool {
        self.selection.toggle(id)
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Generates one certificate per selected recipient and previews the
    /// first. Returns the batch size; an empty selection is a no-op.
    ///
    /// On error the previous batch and preview are left as they were.
    #[instrument(skip_all, fields(selected = self.selection.len()))]
    pub fn generate(
        &mut self,
        roster: &Roster,
        mapping: &ColumnMapping,
    ) -> Result<usize, QualisError> {
        if self.selection.is_empty() {
            return Ok(0);
        }
        self.is_generating = true;

        let template = match &self.template {
            Some(t) => t.clone(),
            None => self.designer.capture_template(),
        };
        let result = generate_batch(roster, &self.selection, &template, mapping.resolve());
        self.is_generating = false;

        let records = result.map_err(|e| {
            error!(error = %e, "Error generating certificates");
            QualisError::Domain(e)
        })?;

        let count = records.len();
        if let Some(cursor) = PreviewCursor::new(records) {
            self.designer
                .apply(CertificateAction::LoadRecord(cursor.current().clone()));
            self.batch = Some(cursor);
        }
        info!(count, "Certificates generated");
        Ok(count)
    }

    pub fn records(&self) -> &[CertificateRecord] {
        self.batch.as_ref().map(|b| b.records()).unwrap_or_default()
    }

    pub fn preview_index(&self) -> Option<usize> {
        self.batch.as_ref().map(|b| b.index())
    }

    /// Moves the preview forward. Returns false at the end of the batch.
    pub fn next_preview(&mut self) -> bool {
        self.navigate(PreviewCursor::next)
    }

    pub fn previous_preview(&mut self) -> bool {
        self.navigate(PreviewCursor::previous)
    }

    fn navigate<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut PreviewCursor) -> Option<&CertificateRecord>,
    {
        let Some(cursor) = self.batch.as_mut() else {
            return false;
        };
        match step(cursor).cloned() {
            Some(record) => {
                self.designer.apply(CertificateAction::LoadRecord(record));
                true
            }
            None => false,
        }
    }

    /// Renders the record currently shown by the designer.
    pub fn render_preview(&self, engine: &dyn TemplateEngine) -> Result<String, QualisError> {
        let context =
            serde_json::to_value(self.designer.current()).map_err(InfrastructureError::from)?;
        engine.render(PREVIEW_TEMPLATE, &context)
    }

    /// Writes the whole batch as JSON.
    pub fn export_batch(&self, path: &Path) -> Result<usize, QualisError> {
        let certificates = self.records();
        let export = BatchExport {
            generated_at: Utc::now().to_rfc3339(),
            count: certificates.len(),
            certificates,
        };
        write_json(path, &export)?;
        info!(path = ?path, count = export.count, "Certificates exported");
        Ok(export.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::certificate::TextField;
    use crate::domain::roster::RowRecord;
    use crate::infrastructure::renderer::JinjaRenderer;
    use anyhow::Result;

    fn roster() -> Roster {
        Roster::new(vec![
            RowRecord::from_pairs(RowId(0), [("fullName", "Ada"), ("course", "Math")]),
            RowRecord::from_pairs(RowId(1), [("fullName", "Grace"), ("course", "Compilers")]),
            RowRecord::from_pairs(RowId(2), [("fullName", "Linus")]),
        ])
    }

    fn session_with_title(title: &str) -> GenerationSession {
        let mut session = GenerationSession::default();
        session.apply(CertificateAction::UpdateText {
            field: TextField::Title,
            value: title.into(),
        });
        session.apply(CertificateAction::UpdateText {
            field: TextField::RecipientName,
            value: "Draft Name".into(),
        });
        session.capture_template();
        session
    }

    #[test]
    fn test_generate_previews_first_record() -> Result<()> {
        let mut session = session_with_title("Certificate");
        session.toggle(RowId(1));
        session.toggle(RowId(0));

        let count = session.generate(&roster(), &ColumnMapping::default())?;

        assert_eq!(count, 2);
        assert_eq!(session.preview_index(), Some(0));
        assert_eq!(session.designer().current().recipient_name, "Grace");
        assert_eq!(session.records()[1].recipient_name, "Ada");
        assert!(session.records().iter().all(|r| r.template.title == "Certificate"));
        Ok(())
    }

    #[test]
    fn test_navigation_updates_designer_and_stops_at_ends() -> Result<()> {
        let mut session = session_with_title("T");
        session.selection_mut().toggle_all(roster().ids());
        session.generate(&roster(), &ColumnMapping::default())?;

        assert!(!session.previous_preview());
        assert!(session.next_preview());
        assert_eq!(session.designer().current().recipient_name, "Grace");
        assert!(session.next_preview());
        assert!(!session.next_preview());
        assert_eq!(session.preview_index(), Some(2));
        assert_eq!(session.designer().current().course_name, "");
        assert!(session.previous_preview());
        assert_eq!(session.designer().current().recipient_name, "Grace");
        Ok(())
    }

    #[test]
    fn test_empty_selection_is_noop() -> Result<()> {
        let mut session = GenerationSession::default();
        assert_eq!(session.generate(&roster(), &ColumnMapping::default())?, 0);
        assert!(session.records().is_empty());
        assert!(!session.next_preview());
        Ok(())
    }

    #[test]
    fn test_failed_generation_keeps_previous_batch() -> Result<()> {
        let mut session = session_with_title("T");
        session.toggle(RowId(0));
        session.generate(&roster(), &ColumnMapping::default())?;

        session.toggle(RowId(9));
        let res = session.generate(&roster(), &ColumnMapping::default());

        assert!(res.is_err());
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.designer().current().recipient_name, "Ada");
        assert!(!session.is_generating());
        Ok(())
    }

    #[test]
    fn test_uncaptured_template_uses_current_design() -> Result<()> {
        let mut session = GenerationSession::default();
        session.apply(CertificateAction::UpdateText {
            field: TextField::Title,
            value: "Live".into(),
        });
        session.toggle(RowId(2));
        session.generate(&roster(), &ColumnMapping::default())?;
        assert_eq!(session.records()[0].template.title, "Live");
        Ok(())
    }

    #[test]
    fn test_render_and_export() -> Result<()> {
        let mut session = session_with_title("Award");
        session.toggle(RowId(0));
        session.generate(&roster(), &ColumnMapping::default())?;

        let preview = session.render_preview(&JinjaRenderer::new())?;
        assert!(preview.starts_with("AWARD\n"));
        assert!(preview.contains("Ada"));

        let dir = tempfile::tempdir()?;
        let out = dir.path().join("target/certificates.json");
        assert_eq!(session.export_batch(&out)?, 1);

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out)?)?;
        assert_eq!(json["count"], 1);
        assert_eq!(json["certificates"][0]["recipientName"], "Ada");
        assert_eq!(json["certificates"][0]["title"], "Award");
        Ok(())
    }
}
