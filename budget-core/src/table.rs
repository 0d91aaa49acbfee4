//! View model shared by the browser renderer and the console output.

use crate::report::{is_total_row, ReportResult, ReportRow, MONTH_COLUMN};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};

/// Placeholder shown when the backend sends neither rows nor a message.
pub const NO_DATA_MESSAGE: &str = "No data found for the selected criteria.";

/// CSS class attached to the aggregate row.
pub const TOTAL_ROW_CLASS: &str = "total-row";

/// What the results region should display.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedReport {
    /// Centered message instead of a table
    Placeholder(String),
    Table(ReportTable),
}

impl From<&ReportResult> for RenderedReport {
    fn from(result: &ReportResult) -> Self {
        match result {
            ReportResult::Empty => RenderedReport::Placeholder(NO_DATA_MESSAGE.to_string()),
            ReportResult::Message(message) => RenderedReport::Placeholder(message.clone()),
            ReportResult::Rows(rows) => RenderedReport::Table(ReportTable::from_rows(rows)),
        }
    }
}

/// A fully formatted table: every cell is already display text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub is_total: bool,
}

impl TableRow {
    pub fn css_class(&self) -> &'static str {
        if self.is_total {
            TOTAL_ROW_CLASS
        } else {
            ""
        }
    }
}

impl ReportTable {
    /// Columns follow the key order of the first row. Later rows are read
    /// by column name, so a missing key renders as an empty cell.
    pub fn from_rows(rows: &[ReportRow]) -> ReportTable {
        let headers: Vec<String> = rows
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = rows
            .iter()
            .map(|row| TableRow {
                cells: headers
                    .iter()
                    .map(|header| format_cell(header, row.get(header)))
                    .collect(),
                is_total: is_total_row(row),
            })
            .collect();

        ReportTable { headers, rows }
    }

    /// Widest cell (or header) per column, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Display text for one cell. Numbers get two decimals except in the
/// `Month` column.
pub fn format_cell(column: &str, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) if column != MONTH_COLUMN => match n.as_f64() {
            Some(f) => to_fixed_2(f),
            None => n.to_string(),
        },
        Some(Value::Number(n)) => plain_number(n),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Two decimal places, ties rounded away from zero on the exact binary
/// value (0.125 -> "0.13", 1.005 -> "1.00").
fn to_fixed_2(f: f64) -> String {
    match Decimal::from_f64_retain(f) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        None => format!("{:.2}", f),
    }
}

/// Shortest text for a number: integral floats drop their ".0".
fn plain_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            return format!("{}", f);
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(body: &str) -> RenderedReport {
        (&ReportResult::from_json(body).unwrap()).into()
    }

    #[test]
    fn test_monthly_table_with_total() {
        let rendered =
            render(r#"[{"Month":"Jan","Spent":1234.5},{"Month":"Total","Spent":1234.5}]"#);
        let RenderedReport::Table(table) = rendered else {
            panic!("expected a table");
        };
        assert_eq!(table.headers, ["Month", "Spent"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, ["Jan", "1234.50"]);
        assert!(!table.rows[0].is_total);
        assert_eq!(table.rows[1].cells, ["Total", "1234.50"]);
        assert_eq!(table.rows[1].css_class(), TOTAL_ROW_CLASS);
    }

    #[test]
    fn test_message_row_renders_placeholder() {
        assert_eq!(
            render(r#"[{"Result":"Budget not found."}]"#),
            RenderedReport::Placeholder("Budget not found.".to_string())
        );
    }

    #[test]
    fn test_empty_renders_default_placeholder() {
        assert_eq!(
            render("[]"),
            RenderedReport::Placeholder(NO_DATA_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let body = r#"[{"Month":"Apr","Spent":3,"Limit":"n/a"},{"Month":"Total","Spent":3}]"#;
        assert_eq!(render(body), render(body));
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell("Spent", Some(&json!(7))), "7.00");
        assert_eq!(format_cell("Spent", Some(&json!(-0.456))), "-0.46");
        assert_eq!(format_cell("Month", Some(&json!(4))), "4");
        assert_eq!(format_cell("Spent", Some(&json!("12.5"))), "12.5");
        assert_eq!(format_cell("Spent", Some(&Value::Null)), "");
        assert_eq!(format_cell("Spent", None), "");
        assert_eq!(format_cell("Closed", Some(&json!(true))), "true");
    }

    #[test]
    fn test_format_cell_ties_round_away_from_zero() {
        assert_eq!(format_cell("Spent", Some(&json!(0.125))), "0.13");
        assert_eq!(format_cell("Spent", Some(&json!(-0.125))), "-0.13");
        assert_eq!(format_cell("Spent", Some(&json!(12.375))), "12.38");
        assert_eq!(format_cell("Spent", Some(&json!(-0.625))), "-0.63");
        // stored just below the tie, so it rounds down
        assert_eq!(format_cell("Spent", Some(&json!(1.005))), "1.00");
        assert_eq!(format_cell("Spent", Some(&json!(2.5))), "2.50");
    }

    #[test]
    fn test_month_numbers_print_plainly() {
        let row: ReportRow = serde_json::from_str(r#"{"Month":4.0}"#).unwrap();
        assert_eq!(format_cell("Month", row.get("Month")), "4");
        assert_eq!(format_cell("Month", Some(&json!(4.5))), "4.5");
        assert_eq!(format_cell("Month", Some(&json!(12))), "12");
    }

    #[test]
    fn test_missing_keys_render_empty() {
        let RenderedReport::Table(table) =
            render(r#"[{"Month":"Jan","Spent":1},{"Month":"Total"}]"#)
        else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[1].cells, ["Total", ""]);
    }

    #[test]
    fn test_column_widths() {
        let RenderedReport::Table(table) =
            render(r#"[{"Month":"September","Spent":1},{"Month":"Total","Spent":12345}]"#)
        else {
            panic!("expected a table");
        };
        assert_eq!(table.column_widths(), [9, 8]);
    }
}
