//! Code for the `curve-probe` executable.
use std::{io::stderr, path::PathBuf};

use clap::Parser;
use curve_probe::{parse_inverted_interval, parse_range, run};
use eyre::Result;
use libcurve::{CurveConfig, InvertedInterval};
use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with `x` and `y` arrays; `null` in `y` marks a gap
    samples: PathBuf,
    /// Domain interval to query, as XMIN,XMAX. May be repeated
    #[clap(long = "range", value_parser = parse_range, allow_hyphen_values = true)]
    ranges: Vec<(f64, f64)>,
    /// Print the extrema over the whole sampled domain
    #[clap(long)]
    global: bool,
    /// TOML configuration file layered over the built-in defaults
    #[clap(long)]
    config: Option<PathBuf>,
    /// Handling of intervals with XMIN > XMAX (Reject or Swap)
    #[clap(long, value_parser = parse_inverted_interval)]
    inverted_interval: Option<InvertedInterval>,
}

/// Starts the logging. Log lines go to stderr so reports can be piped.
fn start_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let subscriber = Registry::default().with(
        fmt::layer()
            .without_time()
            .with_writer(stderr)
            .with_filter(filter),
    );

    set_global_default(subscriber)?;

    Ok(())
}

fn main() -> Result<()> {
    start_logging()?;

    let args = Args::parse();

    let mut config = CurveConfig::new(args.config.as_deref())?;
    if let Some(policy) = args.inverted_interval {
        config.inverted_interval = policy;
    }

    for line in run(&args.samples, &args.ranges, args.global, config)? {
        println!("{line}");
    }

    Ok(())
}
