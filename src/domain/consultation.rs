//! Consultation value types.
//!
//! A `Consultation` owns one selection per form field plus the customer and
//! designer details. It is passed by value into the pure core functions; no
//! component retains it between calls. A `ConsultationRecord` is the evaluated
//! form: the consultation plus its computed grade and prompt, and is the row
//! shape of the record store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::prompt;
use super::selection::{
    CheekboneType, FaceShape, ForeheadType, HairStyle, JawType, NeckLength, NeckThickness,
    Selection, ShoulderShape,
};
use super::stability::{self, StabilityGrade};

/// One complete set of form selections for a single consultation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub customer_name: String,
    pub customer_phone: String,
    pub designer: String,
    pub date: NaiveDate,
    pub face: FaceShape,
    pub forehead: ForeheadType,
    pub cheekbone: CheekboneType,
    pub jaw: JawType,
    pub neck_length: NeckLength,
    pub neck_thickness: NeckThickness,
    pub shoulder: ShoulderShape,
    pub style: HairStyle,
}

impl Consultation {
    /// Evaluate the pure core over this consultation: stability grade from
    /// the three skeletal features, prompt from face shape and hairstyle.
    pub fn evaluate(self) -> ConsultationRecord {
        let grade = stability::grade(self.forehead, self.cheekbone, self.jaw);
        let prompt = prompt::compose(self.face, self.style);
        ConsultationRecord { consultation: self, grade, prompt }
    }
}

/// An evaluated consultation: selections plus derived grade and prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    #[serde(flatten)]
    pub consultation: Consultation,
    pub grade: StabilityGrade,
    pub prompt: String,
}

impl ConsultationRecord {
    /// Record-store column names, in row order.
    pub const COLUMNS: [&'static str; 14] = [
        "date",
        "customer_name",
        "customer_phone",
        "designer",
        "face",
        "forehead",
        "cheekbone",
        "jaw",
        "neck_length",
        "neck_thickness",
        "shoulder",
        "style",
        "grade",
        "prompt",
    ];

    /// Flatten the record into row fields matching `COLUMNS`.
    pub fn fields(&self) -> Vec<String> {
        let c = &self.consultation;
        vec![
            c.date.format("%Y-%m-%d").to_string(),
            c.customer_name.clone(),
            c.customer_phone.clone(),
            c.designer.clone(),
            c.face.as_str().to_string(),
            c.forehead.as_str().to_string(),
            c.cheekbone.as_str().to_string(),
            c.jaw.as_str().to_string(),
            c.neck_length.as_str().to_string(),
            c.neck_thickness.as_str().to_string(),
            c.shoulder.as_str().to_string(),
            c.style.as_str().to_string(),
            self.grade.as_str().to_string(),
            self.prompt.clone(),
        ]
    }

    /// Rebuild a record from row fields. `line` is the 1-based source line
    /// for error reporting.
    pub fn from_fields(fields: &[String], line: usize) -> Result<ConsultationRecord, AppError> {
        if fields.len() != Self::COLUMNS.len() {
            return Err(AppError::RecordParse {
                line,
                reason: format!("expected {} fields, found {}", Self::COLUMNS.len(), fields.len()),
            });
        }

        let date = NaiveDate::parse_from_str(&fields[0], "%Y-%m-%d").map_err(|err| {
            AppError::RecordParse { line, reason: format!("bad date '{}': {}", fields[0], err) }
        })?;

        let consultation = Consultation {
            customer_name: fields[1].clone(),
            customer_phone: fields[2].clone(),
            designer: fields[3].clone(),
            date,
            face: FaceShape::parse(&fields[4]).map_err(|e| field_error(line, e))?,
            forehead: ForeheadType::parse(&fields[5]).map_err(|e| field_error(line, e))?,
            cheekbone: CheekboneType::parse(&fields[6]).map_err(|e| field_error(line, e))?,
            jaw: JawType::parse(&fields[7]).map_err(|e| field_error(line, e))?,
            neck_length: NeckLength::parse(&fields[8]).map_err(|e| field_error(line, e))?,
            neck_thickness: NeckThickness::parse(&fields[9]).map_err(|e| field_error(line, e))?,
            shoulder: ShoulderShape::parse(&fields[10]).map_err(|e| field_error(line, e))?,
            style: HairStyle::parse(&fields[11]).map_err(|e| field_error(line, e))?,
        };
        let grade = StabilityGrade::parse(&fields[12]).map_err(|e| field_error(line, e))?;

        Ok(ConsultationRecord { consultation, grade, prompt: fields[13].clone() })
    }
}

fn field_error(line: usize, err: AppError) -> AppError {
    AppError::RecordParse { line, reason: err.to_string() }
}
