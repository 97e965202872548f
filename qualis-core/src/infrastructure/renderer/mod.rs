pub mod jinja;

pub use jinja::{JinjaRenderer, PREVIEW_TEMPLATE};
