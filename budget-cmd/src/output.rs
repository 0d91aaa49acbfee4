//! Terminal output: the console [`ReportView`] and the table writers.

use budget_core::{RenderedReport, ReportTable, ReportView};
use clap::ValueEnum;
use log::{debug, info, warn};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// Comma-separated values with a header record
    Csv,
}

/// Collects what the submit lifecycle wants shown; the caller prints it
/// once the lifecycle has finished.
#[derive(Debug, Default)]
pub struct ConsoleView {
    report: Option<RenderedReport>,
    error: Option<String>,
}

impl ConsoleView {
    pub fn take_report(&mut self) -> Option<RenderedReport> {
        self.report.take()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ReportView for ConsoleView {
    fn clear(&mut self) {
        self.report = None;
        self.error = None;
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            info!("Generating report...");
        } else {
            debug!("Request finished");
        }
    }

    fn show_error(&mut self, message: &str) {
        warn!("{}", message);
        self.error = Some(message.to_string());
    }

    fn show_report(&mut self, report: RenderedReport) {
        self.report = Some(report);
    }
}

/// Print a rendered report. Placeholders are printed as a single line in
/// every format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RenderedReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match report {
        RenderedReport::Placeholder(message) => writeln!(out, "{}", message)?,
        RenderedReport::Table(table) => match format {
            OutputFormat::Table => write_text_table(out, table)?,
            OutputFormat::Csv => write_csv(out, table)?,
        },
    }
    Ok(())
}

/// Columns padded to their widest cell, two spaces apart. A rule
/// separates the header and sets off the total row.
pub fn write_text_table<W: Write>(out: &mut W, table: &ReportTable) -> std::io::Result<()> {
    let widths = table.column_widths();
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(&table.headers))?;
    writeln!(out, "{}", rule)?;
    for row in &table.rows {
        if row.is_total {
            writeln!(out, "{}", rule)?;
        }
        writeln!(out, "{}", line(&row.cells))?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, table: &ReportTable) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(&row.cells)?;
    }
    wtr.flush()?;
    Ok(())
}
