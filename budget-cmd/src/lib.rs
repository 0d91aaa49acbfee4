//! Command implementations for the budget report CLI.
//!
//! Provides a subcommand that resolves a reporting period, posts it to the
//! report endpoint and prints the table.

use budget_core::{AmountFlag, DateRangeType};
use clap::Subcommand;

pub mod output;
pub mod report;

pub use output::OutputFormat;

#[derive(Subcommand)]
pub enum Command {
    /// Request a monthly budget report and print it
    Report {
        /// Budget to report on
        #[arg(short = 'b', long)]
        budget_name: String,

        /// Amount to aggregate (gross or net)
        #[arg(short = 'a', long, default_value = "gross")]
        amount_flag: AmountFlag,

        /// Reporting period: calendar, financial or custom
        #[arg(short = 'r', long, default_value = "calendar")]
        range: DateRangeType,

        /// Start date (YYYY-MM-DD), custom range only
        #[arg(long, default_value = "")]
        start_date: String,

        /// End date (YYYY-MM-DD), custom range only
        #[arg(long, default_value = "")]
        end_date: String,

        /// Base URL of the report backend
        #[arg(long, env = "BUDGET_REPORT_URL", default_value = "http://localhost:7071")]
        base_url: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            budget_name,
            amount_flag,
            range,
            start_date,
            end_date,
            base_url,
            format,
            dry_run,
        } => {
            let form = budget_core::ReportForm {
                budget_name,
                amount_flag,
                range_type: range,
                custom_start: start_date,
                custom_end: end_date,
            };
            report::run_report(&form, &base_url, format, dry_run).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("budget-cli").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_parse_custom_report() {
        let Command::Report {
            budget_name,
            amount_flag,
            range,
            start_date,
            end_date,
            format,
            dry_run,
            ..
        } = parse(&[
            "report",
            "--budget-name",
            "Groceries",
            "--amount-flag",
            "net",
            "--range",
            "custom",
            "--start-date",
            "2025-04-01",
            "--end-date",
            "2025-06-30",
            "--format",
            "csv",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(budget_name, "Groceries");
        assert_eq!(amount_flag, AmountFlag::Net);
        assert_eq!(range, DateRangeType::Custom);
        assert_eq!(start_date, "2025-04-01");
        assert_eq!(end_date, "2025-06-30");
        assert_eq!(format, OutputFormat::Csv);
        assert!(dry_run);
    }

    #[test]
    fn test_parse_defaults() {
        let Command::Report {
            amount_flag,
            range,
            format,
            dry_run,
            ..
        } = parse(&["report", "-b", "Rent"]).unwrap();

        assert_eq!(amount_flag, AmountFlag::Gross);
        assert_eq!(range, DateRangeType::Calendar);
        assert_eq!(format, OutputFormat::Table);
        assert!(!dry_run);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(parse(&["report", "-b", "Rent", "--fiscal"]).is_err());
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(parse(&["report", "-b", "Rent", "--amount-flag", "both"]).is_err());
        assert!(parse(&["report", "-b", "Rent", "--range", "quarter"]).is_err());
        assert!(parse(&["report"]).is_err());
    }
}
