//! readpal terminal chat entry point.
//!
//! Binary name: `rpal`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! interactive chat loop or one of the utility commands.

mod catalog;
mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "rpal", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.backend_url.clone()).await;

    match cli.command {
        Commands::Chat { persona, name } => {
            cli::chat::run_chat(&state, persona.as_deref(), name.as_deref()).await?;
        }

        Commands::Personas => {
            cli::personas::list_personas(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
