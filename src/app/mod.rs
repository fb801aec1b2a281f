//! Interactive menu loop
//!
//! Reads menu choices from an input stream, creates entries through the
//! [`LogEntryFactory`] and records them in the [`LogRegistry`] it was given.

mod menu;

pub use menu::{MenuChoice, CHOOSE_PROMPT, MENU};

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::entry::LogEntryFactory;
use crate::registry::LogRegistry;

/// Prompt for the kind tag
pub const KIND_PROMPT: &str = "Enter log type (info/warning/error): ";

/// Prompt for the message text
pub const CONTENT_PROMPT: &str = "Enter log content: ";

/// Message printed for an unrecognized menu choice
pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";

/// Main application struct
pub struct App<'a, R, W, E> {
    /// Registry shared with the caller
    registry: &'a mut LogRegistry,
    /// Source of menu choices and entry text
    input: R,
    /// Menu, prompts and displayed entries
    output: W,
    /// Error reports
    errors: E,
}

impl<'a, R, W, E> App<'a, R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    /// Create a new application instance
    pub fn new(registry: &'a mut LogRegistry, input: R, output: W, errors: E) -> Self {
        Self {
            registry,
            input,
            output,
            errors,
        }
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Menu loop started");

        loop {
            self.prompt(&format!("{}{}", MENU, CHOOSE_PROMPT))?;

            // End of input behaves like Exit
            let choice = match self.read_line()? {
                Some(line) => MenuChoice::parse(&line),
                None => {
                    tracing::debug!("Input closed, leaving menu loop");
                    MenuChoice::Exit
                }
            };

            match choice {
                MenuChoice::AddLog => self.add_log()?,
                MenuChoice::ShowLogs => self.show_logs()?,
                MenuChoice::Exit => break,
                MenuChoice::Invalid(raw) => {
                    tracing::debug!("Invalid menu choice: {:?}", raw);
                    writeln!(self.errors, "{}", INVALID_CHOICE)
                        .context("Failed to write to error stream")?;
                }
            }
        }

        tracing::info!(entries = self.registry.len(), "Menu loop finished");
        Ok(())
    }

    /// Handle the Add log option
    fn add_log(&mut self) -> Result<()> {
        self.prompt(KIND_PROMPT)?;
        let (kind, rest) = self.read_token()?;

        self.prompt(CONTENT_PROMPT)?;
        // Text after the kind on the same line is the content, minus one separator
        let message = match rest {
            Some(rest) => rest.chars().skip(1).collect(),
            None => self.read_line()?.unwrap_or_default(),
        };

        match LogEntryFactory::create_log(&kind, &message) {
            Ok(entry) => self.registry.log_entry(&entry),
            Err(e) => {
                tracing::debug!("Rejected log entry: {}", e);
                writeln!(self.errors, "{}", e).context("Failed to write to error stream")?;
            }
        }

        Ok(())
    }

    /// Handle the Display logs option
    fn show_logs(&mut self) -> Result<()> {
        self.registry
            .display_logs(&mut self.output)
            .context("Failed to display logs")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Write a prompt and flush so it shows before blocking on input
    fn prompt(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Read the next whitespace-delimited token, skipping blank lines
    ///
    /// Returns the token and whatever followed it on its line, or None for the
    /// remainder when the token ended the line. End of input yields an empty token.
    fn read_token(&mut self) -> Result<(String, Option<String>)> {
        while let Some(line) = self.read_line()? {
            let start = match line.find(|c: char| !c.is_whitespace()) {
                Some(start) => start,
                None => continue,
            };
            let tail = &line[start..];
            let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
            let token = tail[..end].to_string();
            let rest = &tail[end..];
            let rest = (!rest.is_empty()).then(|| rest.to_string());
            return Ok((token, rest));
        }
        Ok((String::new(), None))
    }

    /// Read one line without its terminator, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
