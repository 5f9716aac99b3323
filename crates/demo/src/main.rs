// File: crates/demo/src/main.rs
// Summary: Demo loads a time/value CSV and prints date ticks for the time range plus linear and log ticks for the values.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use ticks_core::format::date_value_formatter;
use ticks_core::{Axis, Calendar, ScaleKind, Tick, TickerOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Sample {
    t_ms: f64,
    value: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .context("usage: ticks-demo <csv> [pixels] [options.json]")?;
    let pixels: f64 = match args.next() {
        Some(p) => p.parse().with_context(|| format!("invalid pixel width '{p}'"))?,
        None => 800.0,
    };
    let options = match args.next() {
        Some(path) => load_options(Path::new(&path))?,
        None => TickerOptions::x_axis(),
    };
    options.validate().context("invalid ticker options")?;

    let path = PathBuf::from(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    println!("Using input file: {}", path.display());

    let samples = load_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows", samples.len());
    if samples.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let (t0, t1) = minmax(samples.iter().map(|s| s.t_ms));
    let (v0, v1) = minmax(samples.iter().map(|s| s.value));
    let calendar = Calendar::for_options(&options);
    println!(
        "Time range: {} .. {}",
        date_value_formatter(t0 as i64, &calendar).unwrap_or_default(),
        date_value_formatter(t1 as i64, &calendar).unwrap_or_default(),
    );
    println!("Value range: [{v0:.4}, {v1:.4}]");

    let x_axis = Axis::date("Time", t0, t1).with_options(options.clone());
    print_ticks(&x_axis.label, &x_axis.ticks(pixels, &()));

    // value axes share the label options but use the vertical label budget
    let y_options = TickerOptions { pixels_per_label: TickerOptions::y_axis().pixels_per_label, ..options };
    let mut y_axis = Axis::new("Value", v0, v1).with_options(y_options);
    y_axis.set_scale_kind(ScaleKind::Linear);
    print_ticks("Value (linear)", &y_axis.ticks(pixels, &()));
    y_axis.set_scale_kind(ScaleKind::Log10);
    print_ticks("Value (log)", &y_axis.ticks(pixels, &()));

    Ok(())
}

fn print_ticks(title: &str, ticks: &[Tick]) {
    println!("{title}: {} ticks", ticks.len());
    for t in ticks {
        let v = t.v.map(|v| format!("{v}")).unwrap_or_default();
        let label = t.label.as_deref().unwrap_or("").replace('\u{a0}', " ");
        println!("  {v:>20}  {label}");
    }
}

fn load_options(path: &Path) -> Result<TickerOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing options in {}", path.display()))
}

/// Load a CSV with a time column and a value column; rows with an
/// unreadable value are skipped.
fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "date", "datetime", "open_time"])
        .context("no time column (time/timestamp/date/datetime/open_time)")?;
    let i_value = idx(&["value", "close", "price", "y"])
        .context("no value column (value/close/price/y)")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let t = rec.get(i_time).and_then(parse_time_ms);
        let v = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        match (t, v) {
            (Some(t_ms), Some(value)) => out.push(Sample { t_ms, value }),
            _ => tracing::warn!(row, "skipping unreadable row"),
        }
    }
    Ok(out)
}

/// Epoch seconds or milliseconds to milliseconds.
fn parse_time_ms(s: &str) -> Option<f64> {
    let n = s.trim().parse::<f64>().ok()?;
    if !n.is_finite() {
        return None;
    }
    // anything past 1e11 would be beyond year 5000 in seconds
    if n.abs() > 1e11 { Some(n) } else { Some(n * 1000.0) }
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
