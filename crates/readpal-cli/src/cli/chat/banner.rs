//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a session enters chat, showing the
//! persona, who we're talking to, and the conversation identity.

use console::style;

use readpal_types::chat::ConversationHandle;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the persona name and description, the username when the
/// personalized path was taken, and either the backend conversation id
/// or a note that replies won't be saved.
pub fn print_welcome_banner(
    name: &str,
    description: &str,
    username: Option<&str>,
    conversation: &ConversationHandle,
) {
    println!();
    println!("  {}", style(name).cyan().bold());
    println!("  {}", style(description).dim());
    println!();

    if let Some(username) = username {
        println!(
            "  {}  {}",
            style("Reader:").bold(),
            style(username).dim()
        );
    }

    match conversation {
        ConversationHandle::Remote(id) => {
            println!(
                "  {}  {}",
                style("Conversation:").bold(),
                style(short_id(id)).dim()
            );
        }
        ConversationHandle::LocalOnly => {
            println!(
                "  {} {}",
                style("!").yellow().bold(),
                style("Backend unreachable; this conversation won't be saved.").yellow()
            );
        }
    }

    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// First 12 characters of a conversation id, char-boundary safe.
fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}
