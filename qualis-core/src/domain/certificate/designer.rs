// qualis-core/src/domain/certificate/designer.rs
//
// Single owner of the certificate being edited or previewed.
// Every change goes through `apply`, the generation flow included.

use std::fmt;
use std::str::FromStr;

use super::{CertificateRecord, CertificateTemplate, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    RecipientName,
    CourseName,
    CompletionDate,
    CompletionText,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RecipientName => "recipientName",
            Self::CourseName => "courseName",
            Self::CompletionDate => "completionDate",
            Self::CompletionText => "completionText",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "recipientName" | "recipient_name" => Ok(Self::RecipientName),
            "courseName" | "course_name" => Ok(Self::CourseName),
            "completionDate" | "completion_date" => Ok(Self::CompletionDate),
            "completionText" | "completion_text" => Ok(Self::CompletionText),
            _ => Err(format!("Unknown certificate text field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleProperty {
    BorderColor(String),
    BorderWidth(u32),
    BorderStyle(String),
    Background(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CertificateAction {
    SetTemplate(String),
    UpdateText { field: TextField, value: String },
    AddSignature(Placement),
    AddLogo(Placement),
    SetQrCode(Option<String>),
    UpdateStyle(StyleProperty),
    /// Replaces the whole state, used when previewing a generated record.
    LoadRecord(CertificateRecord),
}

#[derive(Debug, Clone, Default)]
pub struct CertificateDesigner {
    current: CertificateRecord,
}

impl CertificateDesigner {
    pub fn new(template: CertificateTemplate) -> Self {
        Self {
            current: CertificateRecord::blank(template),
        }
    }

    pub fn current(&self) -> &CertificateRecord {
        &self.current
    }

    pub fn apply(&mut self, action: CertificateAction) {
        let state = &mut self.current;
        match action {
            CertificateAction::SetTemplate(id) => state.template.template = Some(id),
            CertificateAction::UpdateText { field, value } => match field {
                TextField::Title => state.template.title = value,
                TextField::RecipientName => state.recipient_name = value,
                TextField::CourseName => state.course_name = value,
                TextField::CompletionDate => state.template.completion_date = value,
                TextField::CompletionText => state.template.completion_text = value,
            },
            CertificateAction::AddSignature(p) => state.template.signatures.push(p),
            CertificateAction::AddLogo(p) => state.template.logos.push(p),
            CertificateAction::SetQrCode(data) => state.template.qr_code = data,
            CertificateAction::UpdateStyle(style) => match style {
                StyleProperty::BorderColor(c) => state.template.border_color = c,
                StyleProperty::BorderWidth(w) => state.template.border_width = w,
                StyleProperty::BorderStyle(s) => state.template.border_style = s,
                StyleProperty::Background(b) => state.template.background = b,
            },
            CertificateAction::LoadRecord(record) => *state = record,
        }
    }

    /// Snapshot reused for a whole batch. Recipient-specific values are dropped.
    pub fn capture_template(&self) -> CertificateTemplate {
        self.current.template.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_fields() {
        let mut designer = CertificateDesigner::default();
        designer.apply(CertificateAction::SetTemplate("classic".into()));
        designer.apply(CertificateAction::UpdateText {
            field: TextField::Title,
            value: "Award".into(),
        });
        designer.apply(CertificateAction::UpdateStyle(StyleProperty::BorderWidth(4)));
        designer.apply(CertificateAction::AddLogo(Placement {
            label: "logo".into(),
            source: "logo.png".into(),
            x: 10.0,
            y: 10.0,
        }));
        designer.apply(CertificateAction::SetQrCode(Some("https://verify/1".into())));

        let t = &designer.current().template;
        assert_eq!(t.template.as_deref(), Some("classic"));
        assert_eq!(t.title, "Award");
        assert_eq!(t.border_width, 4);
        assert_eq!(t.logos.len(), 1);
        assert_eq!(t.qr_code.as_deref(), Some("https://verify/1"));
    }

    #[test]
    fn test_capture_drops_recipient() {
        let mut designer = CertificateDesigner::default();
        designer.apply(CertificateAction::UpdateText {
            field: TextField::RecipientName,
            value: "Someone".into(),
        });
        let template = designer.capture_template();
        let record = CertificateRecord::blank(template);
        assert_eq!(record.recipient_name, "");
        assert_eq!(designer.current().recipient_name, "Someone");
    }

    #[test]
    fn test_text_field_parsing() {
        assert_eq!("courseName".parse::<TextField>(), Ok(TextField::CourseName));
        assert_eq!("completion_text".parse::<TextField>(), Ok(TextField::CompletionText));
        assert!("colour".parse::<TextField>().is_err());
    }
}
