//! Budget Report
//!
//! A single form: pick a budget, an amount flag and a reporting period,
//! then submit to get a monthly table back from the backend.
//!
//! Data flow:
//! 1. The form inputs write straight into `AppState` signals.
//! 2. On submit the signals are snapshotted into a `ReportForm` and
//!    `submit_report` resolves the date range against today's local date.
//! 3. `FetchTransport` posts the request to `/api/get_budget_report`.
//! 4. The response lands in `AppState::report` and `ReportTable` draws it
//!    inside `resultsContainer`.

use budget_core::submit_report;
use budget_ui::api::FetchTransport;
use budget_ui::components::{
    AmountFlagSelector, BudgetNameInput, DateRangePicker, DateRangeTypeSelector, ErrorDisplay,
    LoadingSpinner, ReportHeader, ReportTable,
};
use budget_ui::state::AppState;
use chrono::Local;
use dioxus::prelude::*;

/// DOM element the app mounts into.
const ROOT_ID: &str = "budget-report-root";

/// Styling for the aggregate row; the rest comes from the host page.
const TOTAL_ROW_CSS: &str = ".total-row td { font-weight: bold; border-top: 2px solid #333; }";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        // One request at a time; the button is disabled too.
        if !state.begin_submit() {
            log::debug!("Submit ignored: report request already in flight");
            return;
        }

        let form = state.form();
        spawn(async move {
            let mut view = state;
            let today = Local::now().naive_local().date();
            let transport = FetchTransport::default();
            let outcome = submit_report(&transport, &mut view, &form, today).await;
            log::debug!("Submit finished: {:?}", outcome);
            view.end_submit();
        });
    };

    let loading = (state.loading)();
    let submitting = (state.submitting)();

    rsx! {
        style { "{TOTAL_ROW_CSS}" }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ReportHeader {
                title: "Monthly Budget Report".to_string(),
                description: "Financial year runs April 1 to March 31".to_string(),
            }

            form {
                id: "reportForm",
                onsubmit: on_submit,

                BudgetNameInput {}
                AmountFlagSelector {}
                DateRangeTypeSelector {}
                DateRangePicker {}

                button {
                    r#type: "submit",
                    disabled: submitting,
                    "Generate Report"
                }
            }

            if loading {
                LoadingSpinner {}
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            div {
                id: "resultsContainer",
                if let Some(report) = (state.report)() {
                    ReportTable { report }
                }
            }
        }
    }
}
