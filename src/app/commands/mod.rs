//! Command orchestration layer.
//!
//! One module per CLI operation. Handlers stay thin: parse nothing, print
//! nothing, delegate to domain and services.

pub mod analyze;
pub mod consult;
pub mod generate;
pub mod history;
pub mod record;
pub mod report;
