//! Consultation report rendering.
//!
//! Produces the plain-text consultation document: fixed header, customer and
//! designer summary lines, a field-by-field listing, and the composed prompt
//! as a trailing multi-line block.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::selection::{
    CheekboneType, FaceShape, ForeheadType, HairStyle, JawType, NeckLength, NeckThickness,
    Selection, ShoulderShape,
};
use crate::domain::{AppError, ConsultationRecord};

/// Default output file name for the `report` command.
pub const DEFAULT_REPORT_FILE: &str = "hairfit_report.txt";

const REPORT_TEMPLATE: &str = "\
HairFit Consultation Report
===========================

Customer: {{ customer }} / Contact: {{ phone }}
Designer: {{ designer }} / Date: {{ date }}

{% for field in fields -%}
{{ field.label }}: {{ field.value }}
{% endfor %}
[AI Prompt]
{{ prompt }}
";

#[derive(Serialize)]
struct FieldLine {
    label: &'static str,
    value: String,
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    })
}

/// Render the consultation report for an evaluated record.
pub fn render(record: &ConsultationRecord) -> Result<String, AppError> {
    let c = &record.consultation;
    let fields = vec![
        FieldLine { label: FaceShape::LABEL, value: c.face.to_string() },
        FieldLine { label: ForeheadType::LABEL, value: c.forehead.to_string() },
        FieldLine { label: CheekboneType::LABEL, value: c.cheekbone.to_string() },
        FieldLine { label: JawType::LABEL, value: c.jaw.to_string() },
        FieldLine { label: NeckLength::LABEL, value: c.neck_length.to_string() },
        FieldLine { label: NeckThickness::LABEL, value: c.neck_thickness.to_string() },
        FieldLine { label: ShoulderShape::LABEL, value: c.shoulder.to_string() },
        FieldLine { label: HairStyle::LABEL, value: c.style.to_string() },
        FieldLine { label: "Stability grade", value: record.grade.display() },
    ];

    environment()
        .render_str(
            REPORT_TEMPLATE,
            context! {
                customer => c.customer_name,
                phone => c.customer_phone,
                designer => c.designer,
                date => c.date.format("%Y-%m-%d").to_string(),
                fields => fields,
                prompt => record.prompt,
            },
        )
        .map_err(|err| AppError::ReportRender(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Consultation;
    use chrono::NaiveDate;

    fn sample_record() -> ConsultationRecord {
        Consultation {
            customer_name: "Hong Gildong".to_string(),
            customer_phone: "010-0000-0000".to_string(),
            designer: "Designer Ia".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            face: FaceShape::Heart,
            forehead: ForeheadType::Wide,
            cheekbone: CheekboneType::Wide,
            jaw: JawType::Round,
            neck_length: NeckLength::Short,
            neck_thickness: NeckThickness::Thin,
            shoulder: ShoulderShape::Narrow,
            style: HairStyle::HushCut,
        }
        .evaluate()
    }

    #[test]
    fn report_starts_with_fixed_header() {
        let report = render(&sample_record()).unwrap();
        assert!(report.starts_with("HairFit Consultation Report\n===========================\n"));
    }

    #[test]
    fn report_contains_summary_and_field_lines() {
        let report = render(&sample_record()).unwrap();
        assert!(report.contains("Customer: Hong Gildong / Contact: 010-0000-0000"));
        assert!(report.contains("Designer: Designer Ia / Date: 2026-08-29"));
        assert!(report.contains("Face shape: heart"));
        assert!(report.contains("Hairstyle: hush_cut"));
        assert!(report.contains("Stability grade:"));
        assert!(report.contains("D (caution advised)"));
    }

    #[test]
    fn prompt_block_comes_last() {
        let record = sample_record();
        let report = render(&record).unwrap();
        let marker = report.find("[AI Prompt]").expect("prompt marker present");
        assert!(report[marker..].contains(&record.prompt));
    }
}
