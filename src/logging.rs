//! Logging setup
//!
//! Filter priority:
//! 1. **`VICONTEXT_LOG`**
//! 2. **`RUST_LOG`**
//! 3. **Default** - `warn`
//!
//! Output goes to stderr so command output on stdout stays clean.

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "VICONTEXT_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter() -> EnvFilter {
    let directives = env::var(LOG_ENV)
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("Warning: invalid log filter {directives:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}
