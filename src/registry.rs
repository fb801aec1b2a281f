//! In-memory log registry
//!
//! Append-only store of rendered log lines. One registry is created at startup
//! and lent to whatever needs to record or display entries.

use std::io::{self, Write};

use crate::entry::LogEntry;

/// Ordered, append-only store of rendered log lines
#[derive(Debug, Default)]
pub struct LogRegistry {
    /// Stored lines in insertion order
    entries: Vec<String>,
}

impl LogRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message as `[<kind>] <rendered>`
    ///
    /// `kind` is not validated.
    pub fn log_message(&mut self, kind: &str, rendered: &str) {
        let line = format!("[{}] {}", kind, rendered);
        tracing::debug!(index = self.entries.len(), "Recorded log entry: {}", line);
        self.entries.push(line);
    }

    /// Append an entry produced by the factory
    pub fn log_entry(&mut self, entry: &LogEntry) {
        self.log_message(entry.kind().as_str(), &entry.rendered());
    }

    /// All stored lines, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write every stored line to `out`, one per line
    pub fn display_logs<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.entries {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Get the number of entries in the registry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LogEntryFactory;

    fn displayed(registry: &LogRegistry) -> String {
        let mut out = Vec::new();
        registry.display_logs(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut registry = LogRegistry::new();

        registry.log_message("info", "INFO: one");
        registry.log_message("error", "ERROR: two");
        registry.log_message("warning", "WARNING: three");

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.entries(),
            &[
                "[info] INFO: one".to_string(),
                "[error] ERROR: two".to_string(),
                "[warning] WARNING: three".to_string(),
            ]
        );
        assert_eq!(
            displayed(&registry),
            "[info] INFO: one\n[error] ERROR: two\n[warning] WARNING: three\n"
        );
    }

    #[test]
    fn test_kind_is_not_validated() {
        let mut registry = LogRegistry::new();
        registry.log_message("anything goes", "text");
        assert_eq!(registry.entries()[0], "[anything goes] text");
    }

    #[test]
    fn test_shared_handle_sees_mutations() {
        let mut registry = LogRegistry::new();
        {
            let handle = &mut registry;
            handle.log_message("info", "INFO: via handle");
        }
        let other = &registry;
        assert_eq!(other.entries(), &["[info] INFO: via handle".to_string()]);
    }

    #[test]
    fn test_log_entry_double_prefix() {
        let mut registry = LogRegistry::new();
        let entry = LogEntryFactory::create_log("info", "started").unwrap();
        registry.log_entry(&entry);

        assert_eq!(registry.entries(), &["[info] INFO: started".to_string()]);
    }

    #[test]
    fn test_display_is_idempotent() {
        let mut registry = LogRegistry::new();
        registry.log_message("info", "INFO: a");
        registry.log_message("error", "ERROR: b");

        let first = displayed(&registry);
        let second = displayed(&registry);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry_displays_nothing() {
        let registry = LogRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(displayed(&registry), "");
    }
}
