//! Core types for the budget report client.
//!
//! This crate provides:
//! - `date_range`: calendar / financial / custom date-range resolution
//! - `request`: the form snapshot and the JSON request posted to the backend
//! - `report`: the decoded backend response
//! - `table`: the view model the renderers draw from
//! - `submit`: the submit lifecycle, generic over transport and view
//! - `client` (feature `api`): a native `reqwest` transport

pub mod date_range;
pub mod error;
pub mod report;
pub mod request;
pub mod submit;
pub mod table;

#[cfg(feature = "api")]
pub mod client;

pub use date_range::{DateRange, DateRangeType};
pub use error::{ReportError, Result};
pub use report::{ReportResult, ReportRow};
pub use request::{report_url, AmountFlag, ReportForm, ReportRequest, REPORT_ENDPOINT};
pub use submit::{claim_submission, submit_report, ReportTransport, ReportView, SubmitOutcome};
pub use table::{RenderedReport, ReportTable, TableRow};
