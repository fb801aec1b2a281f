//! Menu choice enum
//!
//! Defines what a line typed at the main menu means.

/// Menu text printed before every choice
pub const MENU: &str = "Menu:\n1. Add log\n2. Display logs\n3. Exit\n";

/// Prompt printed after the menu
pub const CHOOSE_PROMPT: &str = "Choose option: ";

/// A selection made at the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a log entry and record it
    AddLog,
    /// Print every recorded entry
    ShowLogs,
    /// Leave the loop
    Exit,
    /// Anything else, including non-numeric input
    Invalid(String),
}

impl MenuChoice {
    /// Parse a menu line
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.parse::<i64>() {
            Ok(1) => MenuChoice::AddLog,
            Ok(2) => MenuChoice::ShowLogs,
            Ok(3) => MenuChoice::Exit,
            _ => MenuChoice::Invalid(trimmed.to_string()),
        }
    }
}
