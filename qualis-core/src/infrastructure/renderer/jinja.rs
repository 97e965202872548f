// qualis-core/src/infrastructure/renderer/jinja.rs

// Turns a generated certificate into a plain-text preview card. The context
// is the record serialized as JSON, so template keys are camelCase.

use minijinja::Environment;

use crate::application::ports::TemplateEngine;
use crate::error::QualisError;
use crate::infrastructure::error::InfrastructureError;

pub const PREVIEW_TEMPLATE: &str = "\
{{ title | upper }}
This is to certify that
{{ recipientName | default('(unnamed recipient)') }}
{{ completionText }}
{{ courseName }}
on {{ completionDate }}
{%- for s in signatures %}
Signed: {{ s.label }}
{%- endfor %}";

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, QualisError> {
        self.env
            .render_str(template, context)
            .map_err(|e| QualisError::Infrastructure(InfrastructureError::TemplateError(e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::certificate::{CertificateRecord, CertificateTemplate, Placement};
    use anyhow::Result;

    #[test]
    fn test_preview_card() -> Result<()> {
        let record = CertificateRecord {
            template: CertificateTemplate {
                title: "Certificate".into(),
                completion_date: "2023-05-15".into(),
                signatures: vec![Placement {
                    label: "Director".into(),
                    source: "sig.png".into(),
                    x: 0.0,
                    y: 0.0,
                }],
                ..CertificateTemplate::default()
            },
            recipient_name: "John Doe".into(),
            course_name: "Advanced React".into(),
        };
        let renderer = JinjaRenderer::new();
        let out = renderer.render(PREVIEW_TEMPLATE, &serde_json::to_value(&record)?)?;

        insta::assert_snapshot!(out, @r"
        CERTIFICATE
        This is to certify that
        John Doe
        has successfully completed the course
        Advanced React
        on 2023-05-15
        Signed: Director
        ");
        Ok(())
    }

    #[test]
    fn test_render_syntax_error() {
        let renderer = JinjaRenderer::new();
        let res = renderer.render("{{ unclosed", &serde_json::json!({}));
        assert!(matches!(
            res,
            Err(QualisError::Infrastructure(InfrastructureError::TemplateError(_)))
        ));
    }
}
