//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

/// Asks the user to confirm a step
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Show `prompt` and return true only on an explicit yes
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Only a trimmed, case-insensitive "y" counts as yes
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Line-based prompter over any reader/writer pair
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.writer, "{} (y/N): ", prompt)?;
        self.writer.flush()?;

        let mut input = Vec::new();
        // EOF leaves the buffer empty, which reads as "no"
        self.reader.read_until(b'\n', &mut input)?;

        // Undecodable bytes are just another non-"y" answer
        Ok(is_affirmative(&String::from_utf8_lossy(&input)))
    }
}
