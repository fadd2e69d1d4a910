mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands};
use folio_client::PortfolioClient;
use folio_core::{ProfileStore, ProfileVars};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    debug!("endpoint: {}", cli.endpoint);
    debug!("stale after: {}s", cli.stale_after);

    let client = PortfolioClient::new(&cli.endpoint);
    let store = ProfileStore::with_stale_after(client, Duration::from_secs(cli.stale_after));
    let vars = ProfileVars::new(store);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => cli::shell::run(&vars).await?,
        Commands::Show(args) => cli::show::run(args, &vars).await?,
        Commands::Fields => cli::show::run_fields(),
        Commands::Links => cli::links::print_table(),
        Commands::Open(args) => cli::links::run_open(args)?,
    }

    Ok(())
}
