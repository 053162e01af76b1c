//! Evaluate a consultation and append it to the record store.

use crate::domain::{AppError, Consultation, ConsultationRecord};
use crate::ports::RecordStore;

pub fn execute<S: RecordStore>(
    store: &S,
    consultation: Consultation,
) -> Result<ConsultationRecord, AppError> {
    let record = consultation.evaluate();
    store.append(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::*;
    use crate::services::CsvRecordStore;
    use chrono::NaiveDate;

    #[test]
    fn record_appends_evaluated_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());
        let consultation = Consultation {
            customer_name: "A".to_string(),
            customer_phone: String::new(),
            designer: "D".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            face: FaceShape::Long,
            forehead: ForeheadType::Narrow,
            cheekbone: CheekboneType::Low,
            jaw: JawType::Recessed,
            neck_length: NeckLength::Short,
            neck_thickness: NeckThickness::Thick,
            shoulder: ShoulderShape::Wide,
            style: HairStyle::MediumLayered,
        };

        let record = execute(&store, consultation).unwrap();
        let rows = store.read_all().unwrap();
        assert_eq!(rows, vec![record]);
    }
}
