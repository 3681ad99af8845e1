//! Tracing subscriber setup.
//!
//! Log lines always go to stderr. Stdout carries exactly one JSON document
//! (or one usage hint), so agents can parse it without filtering.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` wins when set, otherwise the CLI verbosity.
pub fn build_filter(log: &LogConfig) -> EnvFilter {
    if log.quiet {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter_directive()))
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(log: &LogConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::trace!("Tracing subscriber already installed");
    }
}
