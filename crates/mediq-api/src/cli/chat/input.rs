//! Async readline input handling for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop gets simple events and
//! line history for free, with EOF (Ctrl+D) and interrupt (Ctrl+C) folded
//! into explicit variants.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (already trimmed).
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler for the consultation prompt.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler.
    ///
    /// The returned `SharedWriter` must be kept alive for output printed
    /// while the prompt is active to interleave cleanly.
    pub fn new(prompt: &str) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt.to_string())?;
        Ok((Self { rl }, writer))
    }

    /// Read one line of input, recording non-empty lines in history.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    self.rl.add_history_entry(trimmed.clone());
                }
                InputEvent::Message(trimmed)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }
}
