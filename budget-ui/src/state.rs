//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! It is also the [`ReportView`] the submit lifecycle writes into.

use budget_core::{claim_submission, AmountFlag, DateRangeType, RenderedReport, ReportForm, ReportView};
use dioxus::prelude::*;

/// Shared application state for the report page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Free-text budget name
    pub budget_name: Signal<String>,
    /// Selected amount flag
    pub amount_flag: Signal<AmountFlag>,
    /// Selected date range mode
    pub range_type: Signal<DateRangeType>,
    /// Custom range start, as typed
    pub start_date: Signal<String>,
    /// Custom range end, as typed
    pub end_date: Signal<String>,
    /// Set synchronously on submit, cleared when the lifecycle ends
    pub submitting: Signal<bool>,
    /// Whether a report request is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Last rendered report (None until the first successful submit)
    pub report: Signal<Option<RenderedReport>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            budget_name: Signal::new(String::new()),
            amount_flag: Signal::new(AmountFlag::default()),
            range_type: Signal::new(DateRangeType::default()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            submitting: Signal::new(false),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            report: Signal::new(None),
        }
    }

    /// Snapshot the form fields without subscribing to them.
    pub fn form(&self) -> ReportForm {
        ReportForm {
            budget_name: self.budget_name.peek().to_string(),
            amount_flag: *self.amount_flag.peek(),
            range_type: *self.range_type.peek(),
            custom_start: self.start_date.peek().to_string(),
            custom_end: self.end_date.peek().to_string(),
        }
    }

    /// Take the in-flight slot for a new submission; false while one is
    /// already running.
    pub fn begin_submit(&mut self) -> bool {
        claim_submission(&mut self.submitting.write())
    }

    pub fn end_submit(&mut self) {
        self.submitting.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportView for AppState {
    fn clear(&mut self) {
        self.report.set(None);
        self.error_msg.set(None);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn show_error(&mut self, message: &str) {
        self.error_msg.set(Some(message.to_string()));
    }

    fn show_report(&mut self, report: RenderedReport) {
        self.report.set(Some(report));
    }
}
