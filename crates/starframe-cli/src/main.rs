//! starframe CLI entry point.
//!
//! Binary name: `starframe`
//!
//! Parses CLI arguments, loads writer configuration, then dispatches to the
//! table write, collection or health command handlers.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use starframe_types::table::WriteOperation;

use cli::{Cli, Commands, Output};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG wins when set
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,starframe=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Shell completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "starframe", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(
        cli.config_dir.clone(),
        cli.host.as_deref(),
        cli.api_key.as_deref(),
    )
    .await;
    let output = Output {
        json: cli.json,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Insert(args) => {
            cli::write::run(&state, WriteOperation::Insert, args, output).await?;
        }
        Commands::Update(args) => {
            cli::write::run(&state, WriteOperation::Update, args, output).await?;
        }
        Commands::Delete(args) => {
            cli::write::run(&state, WriteOperation::Delete, args, output).await?;
        }
        Commands::Collection { action } => {
            cli::collection::run(&state, action, output).await?;
        }
        Commands::Health => {
            cli::health::run(&state, output).await?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
