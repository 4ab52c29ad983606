//! Main chat loop orchestration.
//!
//! Coordinates the complete session: persona selection (or the quick
//! generic path), optional name capture, the conversation start, the
//! input loop with slash commands and thinking spinners, and the reset
//! path back to selection.

use std::time::Duration;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use readpal_core::session::SessionController;
use readpal_infra::http::HttpBackend;
use readpal_types::chat::Speaker;
use readpal_types::error::SessionError;
use readpal_types::persona::DEFAULT_PERSONA_KEY;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::ChatInput;

/// What the inner input loop decided.
enum LoopOutcome {
    /// User wants out of the binary.
    Exit,
    /// User asked for a fresh session; return to selection.
    Restart,
}

/// Run the interactive chat session.
///
/// `persona_flag` and `name_flag` come from the command line and skip
/// the corresponding interactive prompts for the first session; after a
/// `/reset` selection is always interactive.
pub async fn run_chat(
    state: &AppState,
    persona_flag: Option<&str>,
    name_flag: Option<&str>,
) -> anyhow::Result<()> {
    let mut controller = SessionController::new(
        state.backend.clone(),
        state.backend.clone(),
        state.registry.clone(),
        state.config.history_window,
    );

    let mut persona_flag = persona_flag;
    let mut name_flag = name_flag;

    loop {
        select_and_start(&mut controller, persona_flag.take(), name_flag.take()).await?;

        let persona = controller
            .persona()
            .ok_or_else(|| anyhow::anyhow!("no persona bound after selection"))?;
        let conversation = controller
            .conversation()
            .ok_or_else(|| anyhow::anyhow!("no conversation after selection"))?;

        print_welcome_banner(
            &persona.name,
            &persona.description,
            controller.username(),
            conversation,
        );

        // The greeting is already message 0 of the transcript.
        if let Some(greeting) = controller.messages().first() {
            println!("  {}", greeting.text);
            println!();
        }

        match input_loop(&mut controller).await? {
            LoopOutcome::Exit => return Ok(()),
            LoopOutcome::Restart => {
                controller.reset();
                // Back to the selection screen.
            }
        }
    }
}

/// Drive the controller from `Selecting` into `Chatting`.
async fn select_and_start(
    controller: &mut SessionController<HttpBackend, HttpBackend>,
    persona_flag: Option<&str>,
    name_flag: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(key) = persona_flag {
        if let Some(name) = name_flag {
            controller.begin_naming()?;
            controller.set_username(name)?;
        }
        controller.select_persona(key).await.map_err(|err| match err {
            SessionError::UnknownPersona(key) => anyhow::anyhow!(
                "unknown persona '{key}'; run `rpal personas` to list available keys"
            ),
            other => anyhow::anyhow!(other),
        })?;
        return Ok(());
    }

    let theme = ColorfulTheme::default();

    let paths = vec![
        "Chat with a story character (personalized)",
        "Quick start with the reading coach",
    ];
    let path = Select::with_theme(&theme)
        .with_prompt("How do you want to start?")
        .items(&paths)
        .default(0)
        .interact()?;

    if path == 1 {
        controller.select_persona(DEFAULT_PERSONA_KEY).await?;
        return Ok(());
    }

    controller.begin_naming()?;
    let name: String = Input::with_theme(&theme)
        .with_prompt("What's your name? (leave blank to stay anonymous)")
        .allow_empty(true)
        .interact_text()?;
    match controller.set_username(&name) {
        Ok(()) => {}
        Err(SessionError::EmptyUsername) => {
            // Blank input falls through to the anonymous default.
            debug!("empty username, continuing anonymously");
        }
        Err(err) => return Err(err.into()),
    }

    let items: Vec<String> = controller
        .registry()
        .iter()
        .map(|p| format!("{} - {}", p.name, p.description))
        .collect();
    let keys: Vec<String> = controller
        .registry()
        .iter()
        .map(|p| p.key.clone())
        .collect();

    let chosen = Select::with_theme(&theme)
        .with_prompt("Pick a character")
        .items(&items)
        .default(0)
        .interact()?;

    controller.select_persona(&keys[chosen]).await?;
    Ok(())
}

/// Read lines until the user exits or resets.
async fn input_loop(
    controller: &mut SessionController<HttpBackend, HttpBackend>,
) -> anyhow::Result<LoopOutcome> {
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    while let Some(text) = chat_input.next_submission().await {
        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    return Ok(LoopOutcome::Exit);
                }
                ChatCommand::Reset => {
                    println!("\n  {}", style("Starting over.").dim());
                    return Ok(LoopOutcome::Restart);
                }
                ChatCommand::History => print_history(controller),
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                }
            }
            continue;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = controller.submit(&text).await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => {
                let reply = controller
                    .messages()
                    .last()
                    .map(|m| m.text.as_str())
                    .unwrap_or_default();
                let name = controller
                    .persona()
                    .map(|p| p.name.as_str())
                    .unwrap_or("Agent");
                println!("\n  {} {}\n", style(name).cyan().bold(), reply);
            }
            Err(SessionError::EmptyMessage) => {}
            Err(SessionError::Busy) => {
                println!(
                    "\n  {} Still waiting on the previous reply.\n",
                    style("!").yellow().bold()
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    // Ctrl+D or terminal gone.
    println!("\n  {}", style("Session ended.").dim());
    Ok(LoopOutcome::Exit)
}

/// Print the transcript so far with speaker labels.
fn print_history(controller: &SessionController<HttpBackend, HttpBackend>) {
    let agent_name = controller
        .persona()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Agent".to_string());
    let user_name = controller.username().unwrap_or("You").to_string();

    println!();
    for msg in controller.messages() {
        let label = match msg.speaker {
            Speaker::User => style(user_name.clone()).green().bold(),
            Speaker::Agent => style(agent_name.clone()).cyan().bold(),
        };
        println!("  {} {}", label, msg.text);
    }
    println!();
}
