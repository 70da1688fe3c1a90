pub mod config;
pub mod indicators;
pub mod input;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::config::{Config, OutputConfig};
pub use crate::indicators::{compute, FibonacciPivots, FIB_RATIOS};
pub use crate::input::{ArgsSource, InputError, PriceField, PriceSource, PromptSource};
pub use crate::models::{LevelRow, PivotLevels, SessionPrices};
pub use crate::output::OutputFormat;

use log::debug;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr so stdout only carries results.
pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "warn,fib_pivots=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    debug!("Logging initialized");
}
