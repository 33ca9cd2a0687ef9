//! Sample file loading and report formatting for the `curve-probe` executable.
use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use eyre::{Context, Result};
use libcurve::{CurveConfig, ExplicitCurve, InvertedInterval, MinMax};
use serde::{Deserialize, Serialize};
use tracing::info;

/// On-disk sample set: `{"x": [..], "y": [..]}` where a `null` y is a gap.
#[derive(Debug, Deserialize, Serialize)]
pub struct SampleFile {
    pub x: Vec<f64>,
    pub y: Vec<Option<f64>>,
}

impl SampleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open sample file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse sample file: {}", path.display()))
    }

    pub fn into_curve(self, config: CurveConfig) -> Result<ExplicitCurve> {
        ExplicitCurve::try_with_config(self.x, self.y, config).context("Invalid sample set")
    }
}

/// Parses a domain interval given as `XMIN,XMAX`.
pub fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (xmin, xmax) = s
        .split_once(',')
        .ok_or_else(|| format!("Expected XMIN,XMAX, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid bound '{v}': {e}"))
    };
    Ok((parse(xmin)?, parse(xmax)?))
}

pub fn parse_inverted_interval(s: &str) -> Result<InvertedInterval, String> {
    InvertedInterval::from_str(s).map_err(|_| format!("Expected Reject or Swap, got '{s}'"))
}

pub fn describe(xmin: f64, xmax: f64, result: Option<MinMax>) -> String {
    match result {
        Some(MinMax { min, max }) => format!("[{xmin}, {xmax}]: min={min} max={max}"),
        None => format!("[{xmin}, {xmax}]: no data"),
    }
}

/// Loads `samples`, builds the index and returns one report line per query,
/// preceded by the global extrema if `global` is set.
pub fn run(
    samples: &Path,
    ranges: &[(f64, f64)],
    global: bool,
    config: CurveConfig,
) -> Result<Vec<String>> {
    let curve = SampleFile::load(samples)?.into_curve(config)?;
    info!(
        samples = curve.len(),
        "Indexed curve from {}",
        samples.display()
    );

    let mut report = Vec::with_capacity(ranges.len() + 1);
    if global {
        let (first, last) = curve.domain();
        report.push(describe(first, last, curve.global_min_max()));
    }
    report.extend(
        ranges
            .iter()
            .map(|&(xmin, xmax)| describe(xmin, xmax, curve.query(xmin, xmax))),
    );
    Ok(report)
}
