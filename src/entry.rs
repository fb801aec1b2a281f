//! Log entries and the factory that creates them
//!
//! A kind tag typed by the user is parsed into [`LogKind`] exactly once, in
//! [`LogEntryFactory::create_log`]. Everything downstream works with the enum.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while creating a log entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogEntryError {
    /// The kind tag is not one of `info`, `warning`, `error`
    #[error("Invalid log type: {0}")]
    InvalidKind(String),
}

/// Category of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Info,
    Warning,
    Error,
}

impl LogKind {
    /// The lowercase tag the user types and the registry stores
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
        }
    }

    /// The uppercase prefix prepended to the message text
    pub fn prefix(&self) -> &'static str {
        match self {
            LogKind::Info => "INFO",
            LogKind::Warning => "WARNING",
            LogKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogKind {
    type Err = LogEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(LogKind::Info),
            "warning" => Ok(LogKind::Warning),
            "error" => Ok(LogKind::Error),
            other => Err(LogEntryError::InvalidKind(other.to_string())),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    kind: LogKind,
    message: String,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    /// The raw message text, without prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rendered form, e.g. `INFO: started`
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.prefix(), self.message)
    }
}

/// Creates log entries from a raw kind tag
pub struct LogEntryFactory;

impl LogEntryFactory {
    /// Create a log entry for the given kind tag
    ///
    /// Returns [`LogEntryError::InvalidKind`] for anything other than
    /// `info`, `warning` or `error`.
    pub fn create_log(kind: &str, message: &str) -> Result<LogEntry, LogEntryError> {
        let kind = kind.parse::<LogKind>()?;
        Ok(LogEntry::new(kind, message))
    }
}
