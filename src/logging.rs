//! # Logging
//!
//! Installs a global `tracing` subscriber. Output goes to **stderr** so that
//! stdout only ever carries what the binary prints on purpose.

use anyhow::{Context, Result};
use tracing_subscriber::fmt;

use crate::config::log::LogConfig;

/// Installs the global `fmt` subscriber described by `cfg`.
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init(cfg: &LogConfig) -> Result<()> {
    fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cfg.level)
        .with_ansi(cfg.ansi)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::from_boxed)
        .context("failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error_with_its_cause_kept() {
        let cfg = LogConfig::default();

        // another test may have installed one first, so ignore the first result
        let _ = init(&cfg);
        let err = init(&cfg).unwrap_err();

        assert_eq!(err.to_string(), "failed to install tracing subscriber");
        assert!(err.chain().count() >= 2);
    }
}
