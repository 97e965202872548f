// qualis-core/src/domain/certificate/template.rs

use chrono::Local;
use serde::{Deserialize, Serialize};

/// An image stamped on the certificate (signature, logo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub label: String,
    /// Path or data URI of the image.
    pub source: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Free text block positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Certificate fields shared by every record of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub title: String,
    pub completion_text: String,
    pub completion_date: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_style: String,
    pub background: String,
    pub elements: Vec<TextElement>,
    pub signatures: Vec<Placement>,
    pub logos: Vec<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

impl Default for CertificateTemplate {
    fn default() -> Self {
        Self {
            template: None,
            title: "Certificate of Completion".to_string(),
            completion_text: "has successfully completed the course".to_string(),
            completion_date: Local::now().format("%Y-%m-%d").to_string(),
            border_color: "#000000".to_string(),
            border_width: 2,
            border_style: "solid".to_string(),
            background: "#ffffff".to_string(),
            elements: Vec::new(),
            signatures: Vec::new(),
            logos: Vec::new(),
            qr_code: None,
        }
    }
}
