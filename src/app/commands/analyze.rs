//! Evaluate a consultation without touching any store.

use crate::domain::{Consultation, ConsultationRecord};

pub fn execute(consultation: Consultation) -> ConsultationRecord {
    consultation.evaluate()
}
