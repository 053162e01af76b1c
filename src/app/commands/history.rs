//! Read the stored consultation history back.

use crate::domain::{AppError, ConsultationRecord};
use crate::ports::RecordStore;

pub fn execute<S: RecordStore>(store: &S) -> Result<Vec<ConsultationRecord>, AppError> {
    store.read_all()
}
