use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use placedesk_core::PlaceRecord;

use crate::persist::{AtomicFileWriter, PersistError};

/// One CSV row: column name to value, in insertion order.
pub type CsvRow = Map<String, Value>;

/// Filename used when the caller does not supply one.
pub const DEFAULT_CSV_FILENAME: &str = "resultados.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("record did not serialize to a flat object")]
    NotAnObject,
}

/// Renders rows as CSV text, or `None` for an empty input (a no-op, not an
/// error).
///
/// The header is the first row's keys in iteration order; every later row is
/// projected onto exactly those columns. Extra keys are dropped, missing keys
/// render empty. Data fields are always double-quoted with inner quotes
/// doubled, so no other escaping is needed.
pub fn to_csv(rows: &[CsvRow]) -> Option<String> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|key| quote(&field_text(row.get(*key))))
            .collect();
        lines.push(fields.join(","));
    }
    Some(lines.join("\n"))
}

/// Projects place records onto CSV rows; columns follow the record's field
/// order.
pub fn place_rows(records: &[PlaceRecord]) -> Result<Vec<CsvRow>, ExportError> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(ExportError::NotAnObject),
        })
        .collect()
}

/// Writes the records as a CSV file under `dir`, the native stand-in for a
/// browser download. Empty input writes nothing and returns `Ok(None)`.
pub fn export_csv_file(
    dir: &Path,
    filename: &str,
    records: &[PlaceRecord],
) -> Result<Option<PathBuf>, ExportError> {
    let rows = place_rows(records)?;
    let Some(text) = to_csv(&rows) else {
        return Ok(None);
    };
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write(filename, &text)?;
    Ok(Some(path))
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
