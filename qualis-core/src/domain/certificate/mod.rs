pub mod designer;
pub mod generator;
pub mod preview;
pub mod template;

// Re-exports
pub use designer::{CertificateAction, CertificateDesigner, StyleProperty, TextField};
pub use generator::{CertificateRecord, generate_batch};
pub use preview::PreviewCursor;
pub use template::{CertificateTemplate, Placement, TextElement};
