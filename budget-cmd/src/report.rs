//! The `report` subcommand.

use crate::output::{write_report, ConsoleView, OutputFormat};
use budget_core::client::HttpTransport;
use budget_core::submit::GENERIC_FAILURE_MESSAGE;
use budget_core::{submit_report, ReportForm, SubmitOutcome};
use chrono::Local;
use log::info;

/// Resolve the form against today's local date, send it and print the
/// result. With `dry_run` the request body is printed instead.
pub async fn run_report(
    form: &ReportForm,
    base_url: &str,
    format: OutputFormat,
    dry_run: bool,
) -> anyhow::Result<()> {
    let today = Local::now().naive_local().date();

    if dry_run {
        let request = form.resolve(today)?;
        println!("{}", request.to_json()?);
        return Ok(());
    }

    let transport = HttpTransport::new(base_url)?;
    info!("Posting report request to {}", transport.url());

    let mut view = ConsoleView::default();
    match submit_report(&transport, &mut view, form, today).await {
        SubmitOutcome::Rendered => {
            if let Some(report) = view.take_report() {
                write_report(&mut std::io::stdout().lock(), &report, format)?;
            }
            Ok(())
        }
        SubmitOutcome::Invalid(e) => Err(e.into()),
        SubmitOutcome::Failed(e) => Err(anyhow::Error::new(e).context(GENERIC_FAILURE_MESSAGE)),
    }
}
