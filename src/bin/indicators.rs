//! CLI tool for computing indicators
//! Usage: indicators <function> [period] [extra_args...] < input.json > output.json
//!
//! sma, ema, rsi, rsi_wilder, bollinger, bandwidth read a JSON array of closes.
//! stats and overlays read a JSON array of bars or a full quote payload.

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

use dashboard_indicators::common::to_points;
use dashboard_indicators::quote::QuotePayload;
use dashboard_indicators::{telemetry, OverlayConfig, Overlays, Series};

fn usage() -> ! {
    eprintln!("Usage: indicators <function> [period] [extra_args...]");
    eprintln!("Functions: sma, ema, rsi, rsi_wilder, bollinger, bandwidth, stats, overlays");
    eprintln!("Input: JSON array of closes (or bars / quote payload for stats, overlays) on stdin");
    eprintln!("Output: JSON on stdout, unavailable positions as null");
    std::process::exit(1);
}

/// Accept either a bare bar array or the proxy's quote payload.
fn parse_series(input: &str) -> Result<Series> {
    if input.trim_start().starts_with('{') {
        let payload: QuotePayload = serde_json::from_str(input).context("invalid quote payload")?;
        return Ok(payload.into_series()?);
    }
    serde_json::from_str(input).context("invalid bar array")
}

fn run(args: &[String], input: &str) -> Result<Value> {
    let func = args[1].as_str();
    let period = |default: usize| -> Result<usize> {
        match args.get(2) {
            Some(p) => p.parse::<usize>().with_context(|| format!("invalid period: {p}")),
            None => Ok(default),
        }
    };
    let closes = || -> Result<Vec<f64>> { serde_json::from_str(input).context("expected a JSON array of numbers") };

    let output = match func {
        "sma" => serde_json::to_value(dashboard_indicators::sma(&closes()?, period(20)?))?,
        "ema" => serde_json::to_value(dashboard_indicators::ema(&to_points(&closes()?), period(20)?))?,
        "rsi" => serde_json::to_value(dashboard_indicators::rsi(&closes()?, period(dashboard_indicators::RSI_PERIOD)?))?,
        "rsi_wilder" => {
            serde_json::to_value(dashboard_indicators::rsi_wilder(&closes()?, period(dashboard_indicators::RSI_PERIOD)?))?
        }
        "bollinger" | "bandwidth" => {
            let std_mult: f64 = match args.get(3) {
                Some(s) => s.parse::<f64>().with_context(|| format!("invalid std multiplier: {s}"))?,
                None => dashboard_indicators::BOLLINGER_STD_DEV,
            };
            let p = period(dashboard_indicators::BOLLINGER_PERIOD)?;
            if func == "bollinger" {
                serde_json::to_value(dashboard_indicators::bollinger(&closes()?, p, std_mult))?
            } else {
                serde_json::to_value(dashboard_indicators::bollinger_bandwidth(&closes()?, p, std_mult))?
            }
        }
        "stats" => {
            let series = parse_series(input)?;
            serde_json::to_value(dashboard_indicators::period_stats(series.bars())?)?
        }
        "overlays" => {
            let series = parse_series(input)?;
            serde_json::to_value(Overlays::compute(&series, &OverlayConfig::default()))?
        }
        other => bail!("Unknown function: {other}"),
    };
    Ok(output)
}

fn main() -> Result<()> {
    telemetry::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    // Read JSON input from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
    debug!(function = %args[1], bytes = input.len(), "read input");

    let output = run(&args, &input)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &output)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
