//! Submit lifecycle: `Idle -> Loading -> (Success | Error) -> Idle`.
//!
//! `submit_report` is generic over where the request goes
//! ([`ReportTransport`]) and where the outcome is shown ([`ReportView`]).
//! The browser app plugs in `window.fetch` and Dioxus signals; the CLI
//! plugs in `reqwest` and the terminal.

use crate::error::{ReportError, Result};
use crate::report::ReportResult;
use crate::request::{ReportForm, ReportRequest};
use crate::table::RenderedReport;
use chrono::NaiveDate;
use std::ops::{Deref, DerefMut};

/// Message shown for any transport, API or decode failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate report. Check console for details.";

/// Sends a resolved request to the backend.
#[allow(async_fn_in_trait)]
pub trait ReportTransport {
    async fn fetch_report(&self, request: &ReportRequest) -> Result<ReportResult>;
}

/// Regions the lifecycle writes to. Each call fully replaces what the
/// region showed before.
pub trait ReportView {
    /// Remove any previous report and hide any previous error.
    fn clear(&mut self);
    fn set_loading(&mut self, loading: bool);
    fn show_error(&mut self, message: &str);
    fn show_report(&mut self, report: RenderedReport);
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A table or placeholder was rendered
    Rendered,
    /// The form did not resolve; nothing was sent
    Invalid(ReportError),
    /// The request or its response failed
    Failed(ReportError),
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered)
    }
}

/// Shows the loading indicator for as long as it lives.
struct LoadingGuard<'a, V: ReportView>(&'a mut V);

impl<'a, V: ReportView> LoadingGuard<'a, V> {
    fn new(view: &'a mut V) -> Self {
        view.set_loading(true);
        LoadingGuard(view)
    }
}

impl<V: ReportView> Deref for LoadingGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.0
    }
}

impl<V: ReportView> DerefMut for LoadingGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.0
    }
}

impl<V: ReportView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

/// Claim the single in-flight slot. Returns false, leaving the flag set,
/// when another submission already holds it. Call this synchronously in
/// the submit event, before any task is spawned, and reset the flag once
/// the lifecycle has finished.
pub fn claim_submission(in_flight: &mut bool) -> bool {
    !std::mem::replace(in_flight, true)
}

/// Run one submission to completion.
///
/// Validation happens before the loading indicator appears, so an invalid
/// custom range never shows it. Once a request is in flight the indicator
/// is hidden on every exit path.
pub async fn submit_report<T, V>(
    transport: &T,
    view: &mut V,
    form: &ReportForm,
    today: NaiveDate,
) -> SubmitOutcome
where
    T: ReportTransport,
    V: ReportView,
{
    view.clear();

    let request = match form.resolve(today) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Report form rejected: {}", e);
            view.show_error(&e.to_string());
            return SubmitOutcome::Invalid(e);
        }
    };

    log::info!(
        "Requesting report for {:?} ({}) from {} to {}",
        request.budget_name,
        request.amount_flag,
        request.start_date,
        request.end_date
    );

    let mut view = LoadingGuard::new(view);
    match transport.fetch_report(&request).await {
        Ok(result) => {
            view.show_report(RenderedReport::from(&result));
            SubmitOutcome::Rendered
        }
        Err(e) => {
            log::error!("Error fetching report: {}", e);
            view.show_error(GENERIC_FAILURE_MESSAGE);
            SubmitOutcome::Failed(e)
        }
    }
}
