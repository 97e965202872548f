pub mod certificate;
pub mod error;
pub mod quality;
pub mod roster;

// Handy re-exports to keep imports short elsewhere
pub use error::DomainError;
