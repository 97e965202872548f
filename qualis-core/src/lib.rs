// qualis-core/src/lib.rs

// 1. Documentation is not mandatory yet
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the application needs from the outside world (assessor data source).
pub mod ports;

// 2. Domain (business core)
// Roster & column mapping, certificate templates, risk scoring, sampling.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// CSV / spreadsheet readers, YAML config, assessor sources, Jinja preview.
// Depends on Domain and Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Import session, bulk generation session, risk evaluation.
// Depends on Domain, Infra and Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use qualis_core::QualisError;
pub use error::QualisError;
