//! hairfit: hair-consultation analysis.
//!
//! The core is two pure functions: an ordinal stability grade computed from
//! three skeletal-feature selections, and a fixed-template image prompt
//! composed from the face shape and hairstyle. Everything else (records,
//! reports, the remote image call) is an adapter behind a port.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::commands::{analyze, consult, generate, history, record, report};
use ports::{ImageRef, MockImageClient};
use services::{CsvRecordStore, HttpImageClient};

pub use domain::{
    AppConfig, AppError, CheekboneType, Consultation, ConsultationRecord, FaceShape, ForeheadType,
    HairStyle, ImageApiConfig, JawType, NeckLength, NeckThickness, Selection, ShoulderShape,
    StabilityGrade, grade,
};
pub use domain::prompt::{compose, compose_tokens};
pub use services::{API_KEY_ENV, DEFAULT_REPORT_FILE, DEFAULT_STORE_FILE};

/// Evaluate a consultation: stability grade plus composed prompt.
pub fn analyze(consultation: Consultation) -> ConsultationRecord {
    analyze::execute(consultation)
}

/// Capture a consultation interactively. Returns `None` if cancelled.
pub fn consult() -> Result<Option<Consultation>, AppError> {
    consult::execute()
}

/// Evaluate a consultation and append it to the record store at `store_path`.
pub fn record(store_path: &Path, consultation: Consultation) -> Result<ConsultationRecord, AppError> {
    let store = CsvRecordStore::new(store_path);
    record::execute(&store, consultation)
}

/// Read the full consultation history from the record store at `store_path`.
pub fn history(store_path: &Path) -> Result<Vec<ConsultationRecord>, AppError> {
    let store = CsvRecordStore::new(store_path);
    history::execute(&store)
}

/// Evaluate a consultation and write its report document to `out`.
pub fn report(
    consultation: Consultation,
    out: &Path,
) -> Result<(ConsultationRecord, String), AppError> {
    report::execute(consultation, out)
}

/// Evaluate a consultation and forward its prompt to the image service.
///
/// `count` and `size` default from `hairfit.toml` when not given. With
/// `mock`, no network call is made and a deterministic mock reference is
/// returned; otherwise the credential must be present in `OPENAI_API_KEY`.
pub fn generate(
    consultation: Consultation,
    count: Option<u32>,
    size: Option<String>,
    mock: bool,
) -> Result<(ConsultationRecord, ImageRef), AppError> {
    let config = AppConfig::load(Path::new("."))?;
    let count = count.unwrap_or(config.image.image_count);
    let size = size.unwrap_or_else(|| config.image.image_size.clone());

    if mock {
        generate::execute(&MockImageClient, consultation, count, size)
    } else {
        let client = HttpImageClient::from_env_with_config(&config.image)?;
        generate::execute(&client, consultation, count, size)
    }
}
