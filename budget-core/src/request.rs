//! The report request and the form snapshot it is resolved from.

use crate::date_range::{DateRange, DateRangeType};
use crate::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Path of the report endpoint on the backend.
pub const REPORT_ENDPOINT: &str = "/api/get_budget_report";

/// Join a base URL and [`REPORT_ENDPOINT`]. An empty base yields the
/// relative path the browser app posts to.
pub fn report_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), REPORT_ENDPOINT)
}

/// Which monetary field the backend aggregates. Opaque to the client;
/// only the wire value matters.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum AmountFlag {
    #[default]
    Gross,
    Net,
}

impl AmountFlag {
    pub const ALL: [AmountFlag; 2] = [AmountFlag::Gross, AmountFlag::Net];

    pub fn as_str(&self) -> &'static str {
        match self {
            AmountFlag::Gross => "Gross",
            AmountFlag::Net => "Net",
        }
    }
}

impl fmt::Display for AmountFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountFlag {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gross" => Ok(AmountFlag::Gross),
            "net" => Ok(AmountFlag::Net),
            _ => Err(ReportError::UnknownAmountFlag(s.to_string())),
        }
    }
}

/// Snapshot of the report form at submit time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub budget_name: String,
    pub amount_flag: AmountFlag,
    pub range_type: DateRangeType,
    /// Raw text of the custom start input
    pub custom_start: String,
    /// Raw text of the custom end input
    pub custom_end: String,
}

impl ReportForm {
    /// Build the request for this form, resolving the date range against
    /// `today` (the local calendar date).
    pub fn resolve(&self, today: NaiveDate) -> Result<ReportRequest> {
        let range = DateRange::resolve(
            self.range_type,
            today,
            &self.custom_start,
            &self.custom_end,
        )?;
        Ok(ReportRequest::new(&self.budget_name, self.amount_flag, range))
    }
}

/// JSON body posted to [`REPORT_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub budget_name: String,
    pub amount_flag: AmountFlag,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportRequest {
    pub fn new(budget_name: &str, amount_flag: AmountFlag, range: DateRange) -> Self {
        Self {
            budget_name: budget_name.to_string(),
            amount_flag,
            start_date: range.start(),
            end_date: range.end(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
