//! Diagnostic logging
//!
//! Installs a tracing subscriber that writes to stderr. Stdout carries the
//! menu and displayed entries only.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the filter: RUST_LOG wins, then the configured directive
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &Config) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_build_filter_from_config() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            log_filter: "logbook=debug".to_string(),
        };
        let filter = build_filter(&config);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
