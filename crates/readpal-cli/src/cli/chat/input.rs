//! Async line input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` behind a single `next_submission`
//! call that yields trimmed, non-empty lines: blank input is skipped,
//! Ctrl+C prints a hint and keeps reading, and Ctrl+D (or losing the
//! terminal) closes the stream.

use console::style;
use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Line source for the chat loop.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create an input handler with the given prompt.
    ///
    /// Returns the handler and a `SharedWriter` that can print without
    /// interfering with the readline prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Wait for the next non-empty line.
    ///
    /// Returns `None` once the user closes the stream with Ctrl+D or
    /// the terminal goes away. Ctrl+C never ends the session here; it
    /// prints a hint and resumes reading.
    pub async fn next_submission(&mut self) -> Option<String> {
        loop {
            match self.rl.readline().await {
                Ok(ReadlineEvent::Line(line)) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        return Some(line.to_string());
                    }
                }
                Ok(ReadlineEvent::Eof) => return None,
                Ok(ReadlineEvent::Interrupted) => {
                    println!(
                        "\n  {}",
                        style("Press Ctrl+D to exit, or keep chatting.").dim()
                    );
                }
                Err(_) => return None,
            }
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
