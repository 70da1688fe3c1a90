// src/bin/fib_pivots.rs
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fib_pivots::{
    config::{resolve_config_path, Config},
    input::{ArgsSource, PriceSource, PromptSource},
    output::{render, OutputFormat},
    setup_logging, FibonacciPivots,
};
use log::*;
use std::io::Write;
use std::path::PathBuf;

// CLI Arguments
#[derive(Parser)]
#[clap(author, version, about = "Fibonacci pivot point, support and resistance calculator")]
struct Args {
    /// Session high, low and close. Prompted on stdin when omitted.
    /// Put `--` before the prices when one starts with `-` but is not a
    /// plain number (e.g. `-- -inf 1 1`).
    #[clap(value_name = "PRICE", num_args = 0..=3, allow_negative_numbers = true)]
    prices: Vec<String>,

    /// Output format (overrides the config file)
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fixed decimal places for text and table output
    #[clap(short, long)]
    precision: Option<usize>,

    /// Path to configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Load .env if present, before anything reads RUST_LOG
    dotenv::dotenv().ok();

    let args = Args::parse();
    setup_logging(args.verbose);

    let config = Config::load_from_file(resolve_config_path(args.config.clone()))?;
    let format = args.format.unwrap_or(config.output.format);
    let precision = args.precision.or(config.output.precision);

    let prices = match args.prices.as_slice() {
        [high, low, close] => ArgsSource::new(high, low, close).read_prices()?,
        [] => {
            let mut source = PromptSource::stdio();
            source.read_prices()?
        }
        given => {
            return Err(anyhow!(
                "expected HIGH LOW CLOSE, got {} value(s)",
                given.len()
            ))
        }
    };

    if prices.is_inverted() {
        warn!(
            "High {} is below low {}; support and resistance levels will be inverted",
            prices.high, prices.low
        );
    }

    let _span = tracing::debug_span!(
        "calculate",
        high = prices.high,
        low = prices.low,
        close = prices.close
    )
    .entered();
    let levels = FibonacciPivots::default().calculate(&prices);
    debug!("Pivot point {} from range {}", levels.pivot_point, prices.range());

    let rendered = render(&levels, format, precision)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write results")?;
    stdout.flush().context("Failed to write results")?;

    Ok(())
}
