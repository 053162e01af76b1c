//! Render and write the consultation report document.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Consultation, ConsultationRecord};
use crate::services::report;

pub fn execute(
    consultation: Consultation,
    out: &Path,
) -> Result<(ConsultationRecord, String), AppError> {
    let record = consultation.evaluate();
    let rendered = report::render(&record)?;
    fs::write(out, &rendered)?;
    Ok((record, rendered))
}
