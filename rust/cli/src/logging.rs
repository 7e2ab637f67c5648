//! Diagnostic logging setup.
//!
//! Engine events go to stderr through `tracing-subscriber`. `MASKCARD_LOG`
//! takes an `EnvFilter` directive; otherwise `-v` raises the level from
//! `warn` to `debug` (`-vv` for `trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MASKCARD_LOG";

pub fn filter_for(verbose: u8) -> EnvFilter {
    if let Ok(directive) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(directive)
    {
        return filter;
    }
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::new(level)
}

/// Installs the global subscriber. Later calls (e.g. from tests running
/// several commands in one process) are no-ops.
pub fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
