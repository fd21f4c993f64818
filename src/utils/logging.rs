//! Logging utilities
//!
//! Provides logging setup for the shell binary.

use log::LevelFilter;

/// Setup logging. Defaults to warnings so log lines do not interleave with
/// shell replies; `RUST_LOG` overrides.
pub fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
