//! Budget CLI - Command line client for the budget report endpoint.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "budget-cli",
    version,
    about = "Monthly budget report client"
)]
struct Cli {
    #[command(subcommand)]
    command: budget_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    budget_cmd::run(cli.command).await
}
