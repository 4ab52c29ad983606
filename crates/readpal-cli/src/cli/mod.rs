//! CLI command definitions and dispatch for the `rpal` binary.
//!
//! Uses clap derive macros for argument parsing. Most of the binary is
//! the interactive `rpal chat` loop; the remaining commands are small
//! utilities around the persona catalog.

pub mod chat;
pub mod personas;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with story characters about what you're reading.
#[derive(Parser)]
#[command(name = "rpal", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL (overrides config.toml).
    #[arg(long, global = true, env = "READPAL_BACKEND_URL")]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat {
        /// Persona key to chat with (skips the selection screen).
        #[arg(long)]
        persona: Option<String>,

        /// Your name, used to personalize greetings.
        #[arg(long)]
        name: Option<String>,
    },

    /// List the built-in personas.
    #[command(alias = "ls")]
    Personas,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
