//! Slash command parsing and execution for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the
//! transcript, session reset, and help.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Discard the session and return to persona selection.
    Reset,
    /// Show the session transcript so far.
    History,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/reset" | "/new" => Some(ChatCommand::Reset),
        "/history" => Some(ChatCommand::History),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}    {}",
        style("/help").cyan(),
        "Show this help message"
    );
    println!("  {}   {}", style("/clear").cyan(), "Clear the screen");
    println!(
        "  {} {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!(
        "  {}   {}",
        style("/reset").cyan(),
        "Start over with a new character"
    );
    println!(
        "  {}    {}",
        style("/exit").cyan(),
        "End the chat session"
    );
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_reset() {
        assert_eq!(parse("/reset"), Some(ChatCommand::Reset));
        assert_eq!(parse("/new"), Some(ChatCommand::Reset));
    }

    #[test]
    fn test_parse_history_case_insensitive() {
        assert_eq!(parse("/History"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
