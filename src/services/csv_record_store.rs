//! Filesystem-backed consultation record store.
//!
//! One file, delimiter-separated text rows. The first append creates the file
//! and writes the header; later appends add one row each. Fields containing
//! the delimiter, quotes, or newlines are quoted (the prompt text always
//! contains commas), and read-back returns every row verbatim in insertion
//! order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ConsultationRecord};
use crate::ports::RecordStore;

/// Default store file name in the working directory.
pub const DEFAULT_STORE_FILE: &str = "hairfit_results.csv";

/// Append-only CSV store for consultation records.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    /// Create a store handle for the given file path. The file itself is
    /// created lazily on first append.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store handle for `hairfit_results.csv` in the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_STORE_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&self, record: &ConsultationRecord) -> Result<(), AppError> {
        let is_new = !self.path.exists();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        if is_new {
            writeln!(file, "{}", ConsultationRecord::COLUMNS.join(","))?;
        }
        writeln!(file, "{}", encode_row(&record.fields()))?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<ConsultationRecord>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let rows = parse_rows(&raw)?;

        let mut records = Vec::new();
        for (line, fields) in rows.into_iter().skip(1) {
            records.push(ConsultationRecord::from_fields(&fields, line)?);
        }
        Ok(records)
    }
}

fn needs_quoting(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn encode_field(field: &str) -> String {
    if needs_quoting(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn encode_row(fields: &[String]) -> String {
    fields.iter().map(|f| encode_field(f)).collect::<Vec<_>>().join(",")
}

/// Parse quoted CSV text into rows of fields, tagged with the 1-based line
/// number where each row starts.
fn parse_rows(raw: &str) -> Result<Vec<(usize, Vec<String>)>, AppError> {
    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut row_line = 1usize;
    let mut row_started = false;

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        current.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    current.push(ch);
                }
                _ => current.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                if !current.is_empty() {
                    return Err(AppError::RecordParse {
                        line,
                        reason: "unexpected quote inside unquoted field".to_string(),
                    });
                }
                in_quotes = true;
                row_started = true;
            }
            ',' => {
                fields.push(std::mem::take(&mut current));
                row_started = true;
            }
            '\r' => {}
            '\n' => {
                line += 1;
                if row_started || !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                    rows.push((row_line, std::mem::take(&mut fields)));
                }
                row_started = false;
                row_line = line;
            }
            _ => {
                current.push(ch);
                row_started = true;
            }
        }
    }

    if in_quotes {
        return Err(AppError::RecordParse {
            line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if row_started || !current.is_empty() {
        fields.push(current);
        rows.push((row_line, fields));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::{FaceShape, HairStyle, JawType};
    use crate::domain::{Consultation, selection};
    use chrono::NaiveDate;

    fn sample(customer: &str) -> ConsultationRecord {
        Consultation {
            customer_name: customer.to_string(),
            customer_phone: "010-1234-5678".to_string(),
            designer: "Designer Ia".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
            face: FaceShape::Oval,
            forehead: selection::ForeheadType::Medium,
            cheekbone: selection::CheekboneType::Average,
            jaw: JawType::Defined,
            neck_length: selection::NeckLength::Long,
            neck_thickness: selection::NeckThickness::Average,
            shoulder: selection::ShoulderShape::Average,
            style: HairStyle::Bob,
        }
        .evaluate()
    }

    #[test]
    fn first_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());

        store.append(&sample("A")).unwrap();
        store.append(&sample("B")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let lines: Vec<&str> = raw.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ConsultationRecord::COLUMNS.join(","));
        assert_eq!(raw.matches("date,customer_name").count(), 1);
    }

    #[test]
    fn read_back_preserves_rows_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());

        let records: Vec<ConsultationRecord> =
            ["first", "second", "third"].iter().map(|name| sample(name)).collect();
        for record in &records {
            store.append(record).unwrap();
        }

        let back = store.read_all().unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn prompt_commas_survive_quoting() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());

        let record = sample("comma-test");
        assert!(record.prompt.contains(','));
        store.append(&record).unwrap();

        let back = store.read_all().unwrap();
        assert_eq!(back[0].prompt, record.prompt);
    }

    #[test]
    fn quotes_and_newlines_in_text_fields_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());

        let mut record = sample("tricky");
        record.consultation.customer_name = "Kim \"Sol\" Yena".to_string();
        record.consultation.designer = "line one\nline two".to_string();
        store.append(&record).unwrap();

        let back = store.read_all().unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0], record);
    }

    #[test]
    fn read_all_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::in_dir(dir.path());
        store.append(&sample("ok")).unwrap();

        let mut raw = fs::read_to_string(store.path()).unwrap();
        raw.push_str("only,three,fields\n");
        fs::write(store.path(), raw).unwrap();

        let err = store.read_all().unwrap_err();
        match err {
            AppError::RecordParse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encode_field_quotes_only_when_needed() {
        assert_eq!(encode_field("plain"), "plain");
        assert_eq!(encode_field("a,b"), "\"a,b\"");
        assert_eq!(encode_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
