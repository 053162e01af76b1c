//! Consultation record store port definition.

use crate::domain::{AppError, ConsultationRecord};

/// Port for the durable, append-only consultation record store.
pub trait RecordStore {
    /// Append one evaluated consultation as a row. The first append creates
    /// the store with a header; later appends add rows.
    fn append(&self, record: &ConsultationRecord) -> Result<(), AppError>;

    /// Read every stored row back, in insertion order, fields verbatim.
    fn read_all(&self) -> Result<Vec<ConsultationRecord>, AppError>;
}
