//! Mediq CLI entry point.
//!
//! Binary name: `mediq`
//!
//! Parses CLI arguments, initializes the data directory and services, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use anyhow::anyhow;
use clap::Parser;
use clap_complete::generate;

use mediq_observe::tracing_setup::{LogFormat, init_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,mediq_core=debug,mediq_infra=debug",
        _ => "trace",
    };
    let format = if std::env::var("MEDIQ_LOG_FORMAT").is_ok_and(|v| v == "json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(filter, format).map_err(|err| anyhow!("tracing init failed: {err}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mediq", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (snapshot, provider, services)
    let mut state = AppState::init().await?;

    match cli.command {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&mut state).await?;
        }
        Commands::Sessions { search } => {
            cli::session::list_sessions(&state, search.as_deref(), cli.json)?;
        }
        Commands::Show { id } => {
            cli::session::show_session(&state, &id, cli.json)?;
        }
        Commands::Delete { id, force } => {
            cli::session::delete_session(&mut state, &id, force).await?;
        }
        Commands::Export { id } => {
            cli::session::export(&state, id.as_deref())?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
