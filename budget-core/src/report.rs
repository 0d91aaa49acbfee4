//! Decoded backend response.
//!
//! The backend answers with a JSON array of objects. Two shapes are not
//! really tables: an empty array, and a single row carrying a `Result`
//! message instead of data. `ReportResult` names those cases explicitly.

use crate::error::Result;
use serde_json::{Map, Value};

/// Column holding the row label; its values are never number-formatted.
pub const MONTH_COLUMN: &str = "Month";

/// Label marking the aggregate row.
pub const TOTAL_LABEL: &str = "Total";

/// Field the backend uses to send a message instead of rows.
pub const RESULT_FIELD: &str = "Result";

/// One row of the report: column name to cell value, in backend order.
pub type ReportRow = Map<String, Value>;

/// What the backend returned for a report request.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportResult {
    /// No rows at all
    Empty,
    /// A single row carrying a human-readable `Result` message
    Message(String),
    /// Tabular data; the first row's key order defines the columns
    Rows(Vec<ReportRow>),
}

impl ReportResult {
    /// Classify a decoded row set.
    pub fn from_rows(rows: Vec<ReportRow>) -> ReportResult {
        if rows.is_empty() {
            return ReportResult::Empty;
        }
        if rows.len() == 1 {
            if let Some(message) = rows[0].get(RESULT_FIELD).and_then(message_text) {
                return ReportResult::Message(message);
            }
        }
        ReportResult::Rows(rows)
    }

    /// Decode a response body. Anything other than an array of objects is
    /// an error.
    pub fn from_json(body: &str) -> Result<ReportResult> {
        let rows: Vec<ReportRow> = serde_json::from_str(body)?;
        Ok(ReportResult::from_rows(rows))
    }

    pub fn rows(&self) -> &[ReportRow] {
        match self {
            ReportResult::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Returns true if this row is the aggregate row.
pub fn is_total_row(row: &ReportRow) -> bool {
    matches!(row.get(MONTH_COLUMN), Some(Value::String(s)) if s == TOTAL_LABEL)
}

/// Text of a `Result` field, or None when the value is falsy
/// (null, false, zero, empty string). Other non-string values are shown
/// as their JSON text, so `[]` reads "[]" and `{}` reads "{}".
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
