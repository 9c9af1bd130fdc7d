// src/logging.rs
//! stderr log output for both tools.
//!
//! A `tracing-subscriber` fmt subscriber writes to stderr; stdout stays
//! reserved for tool output. The engine and font crates log through the
//! `log` facade, which the subscriber picks up via its `tracing-log` bridge.

use crate::args::LogOptions;
use std::io::IsTerminal;
use tracing_subscriber::filter::LevelFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[must_use]
pub fn level_filter(options: LogOptions) -> LevelFilter {
    if options.quiet {
        return LevelFilter::ERROR;
    }
    match options.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a subscriber or `log` logger is already installed.
pub fn init(options: LogOptions) -> Result<(), InitError> {
    let stderr = std::io::stderr();
    tracing_subscriber::fmt()
        .with_max_level(level_filter(options))
        .with_writer(std::io::stderr)
        .with_ansi(stderr.is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
}
