//! logbook - interactive in-memory log book
//!
//! One [`registry::LogRegistry`] is created per process and lent to the menu
//! loop. Entries are built by [`entry::LogEntryFactory`] from a kind tag.

pub mod app;
pub mod config;
pub mod entry;
pub mod logging;
pub mod registry;
