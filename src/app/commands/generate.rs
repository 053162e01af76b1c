//! Forward the composed prompt to the image-generation service.

use crate::domain::{AppError, Consultation, ConsultationRecord};
use crate::ports::{ImageClient, ImageRef, ImageRequest};

pub fn execute<C: ImageClient>(
    client: &C,
    consultation: Consultation,
    count: u32,
    size: String,
) -> Result<(ConsultationRecord, ImageRef), AppError> {
    let record = consultation.evaluate();
    let image = client
        .generate(ImageRequest { prompt: record.prompt.clone(), count, size })?;
    Ok((record, image))
}
