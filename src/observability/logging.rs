//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the binary
//! - Resolve the log filter from the environment or configuration
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Safe to call more than once; later calls leave the first subscriber in place

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log levels accepted in configuration.
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Returns true if `level` is one of [`LEVELS`], ignoring case.
pub fn is_valid_level(level: &str) -> bool {
    LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level))
}

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(level: &str) -> String {
    format!("gallery_router={}", level.to_ascii_lowercase())
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(level: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_validation() {
        assert!(is_valid_level("info"));
        assert!(is_valid_level("DEBUG"));
        assert!(!is_valid_level("verbose"));
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("Warn"), "gallery_router=warn");
    }

    #[test]
    fn test_init_twice() {
        let _ = init_logging("debug");
        assert!(init_logging("info").is_err());
        tracing::info!("still logging after a rejected second init");
    }
}
