// File: crates/ticks-core/src/numeric.rs
// Summary: Numeric axis ticker: "nice number" linear placement and logarithmic placement.

use std::any::Any;
use std::sync::OnceLock;

use crate::options::{LabelInput, TickerOptions};
use crate::types::{Tick, TickList};

/// Log placement is kept only when it spans at least `nTicks / 4` preferred
/// values. Empirical constant; do not re-derive.
pub const LOG_RETENTION_DIVISOR: f64 = 4.0;

const DECIMAL_MULTIPLIERS: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];
const BINARY_MULTIPLIERS: [f64; 9] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0];

/// Human-friendly log-axis values `k * 10^n`, `k` in 1..=9, `n` in -39..=39, ascending.
pub fn preferred_log_tick_values() -> &'static [f64] {
    static VALUES: OnceLock<Vec<f64>> = OnceLock::new();
    VALUES.get_or_init(|| {
        (-39..=39)
            .flat_map(|power| {
                let range = 10f64.powi(power);
                (1..=9).map(move |mult| range * mult as f64)
            })
            .collect()
    })
}

/// Indices `(min_idx, max_idx)` into the preferred values: first value `>= a`
/// (0 if none) and last value `<= b` (last index if none).
pub fn log_tick_window(a: f64, b: f64) -> (usize, usize) {
    let vals = preferred_log_tick_values();
    let lo = vals.partition_point(|&v| v < a);
    let min_idx = if lo == vals.len() { 0 } else { lo };
    let hi = vals.partition_point(|&v| v <= b);
    let max_idx = if hi == 0 { vals.len() - 1 } else { hi - 1 };
    (min_idx, max_idx)
}

fn is_degenerate(a: f64, b: f64, pixels: f64, opts: &TickerOptions) -> bool {
    !(a.is_finite() && b.is_finite() && pixels.is_finite())
        || pixels <= 0.0
        || a == b
        || !(opts.pixels_per_label > 0.0)
}

/// Gridlines on preferred log values. Labels closer than `pixels_per_label`
/// to the previously labeled tick are blanked. Empty when rejected.
fn log_ticks(a: f64, b: f64, pixels: f64, pixels_per_tick: f64) -> TickList {
    if a <= 0.0 || b <= 0.0 {
        return Vec::new();
    }
    let n_ticks = (pixels / pixels_per_tick).floor();
    let (min_idx, max_idx) = log_tick_window(a, b);
    let span = max_idx as f64 - min_idx as f64;
    if span < n_ticks / LOG_RETENTION_DIVISOR {
        return Vec::new();
    }

    let vals = preferred_log_tick_values();
    let scale = (b / a).ln();
    let mut ticks = Vec::with_capacity(max_idx - min_idx + 1);
    let mut last_displayed: Option<f64> = None;
    for &value in vals[min_idx..=max_idx].iter().rev() {
        let pixel_coord = (value / a).ln() / scale * pixels;
        let mut tick = Tick::at(value);
        match last_displayed {
            Some(prev) if (pixel_coord - prev).abs() < pixels_per_tick => {
                tick.label = Some(String::new());
            }
            _ => last_displayed = Some(pixel_coord),
        }
        ticks.push(tick);
    }
    // walked from the top down
    ticks.reverse();
    ticks
}

/// Evenly spaced ticks at multiples of `base^k * multiplier`.
fn linear_ticks(a: f64, b: f64, pixels: f64, pixels_per_tick: f64, kmg2: bool) -> TickList {
    let (mults, base): (&[f64], f64) = if kmg2 {
        (&BINARY_MULTIPLIERS, 16.0)
    } else {
        (&DECIMAL_MULTIPLIERS, 10.0)
    };

    let max_ticks = (pixels / pixels_per_tick).ceil();
    // abs(): the axis may be reversed
    let units_per_tick = (b - a).abs() / max_ticks;
    let base_power = (units_per_tick.ln() / base.ln()).floor();
    let base_scale = base.powf(base_power);

    let mut scale = base_scale;
    let mut low = a;
    let mut high = b;
    let mut n_ticks = 0.0;
    for &m in mults {
        scale = base_scale * m;
        low = (a / scale).floor() * scale;
        high = (b / scale).ceil() * scale;
        n_ticks = (high - low).abs() / scale;
        let spacing = pixels / n_ticks;
        if spacing > pixels_per_tick {
            break;
        }
    }

    if !n_ticks.is_finite() || n_ticks <= 0.0 || !scale.is_finite() || scale == 0.0 {
        return Vec::new();
    }
    if low > high {
        scale = -scale;
    }

    let count = n_ticks.floor() as usize;
    (0..=count).map(|i| Tick::at(low + i as f64 * scale)).collect()
}

fn apply_labels(ticks: &mut [Tick], opts: &TickerOptions, ctx: &dyn Any) {
    for tick in ticks.iter_mut().filter(|t| t.label.is_none()) {
        if let Some(v) = tick.v {
            tick.label = Some(opts.format_label(&LabelInput::Number(v), ctx));
        }
    }
}

/// Ticks for a numeric axis over `[a, b]` (`a > b` is a reversed axis) that
/// is `pixels` long.
///
/// `forced_values` (used to align a secondary axis to a primary one) become
/// ticks verbatim and skip placement entirely. Degenerate input yields an
/// empty list.
pub fn numeric_ticks(
    a: f64,
    b: f64,
    pixels: f64,
    opts: &TickerOptions,
    ctx: &dyn Any,
    forced_values: Option<&[f64]>,
) -> TickList {
    let mut ticks: TickList = match forced_values {
        Some(vals) => vals.iter().copied().map(Tick::at).collect(),
        None if is_degenerate(a, b, pixels, opts) => {
            tracing::debug!(a, b, pixels, "degenerate numeric range, no ticks");
            Vec::new()
        }
        None => {
            let pixels_per_tick = opts.pixels_per_label;
            let mut ticks = if opts.logscale {
                log_ticks(a, b, pixels, pixels_per_tick)
            } else {
                Vec::new()
            };
            if opts.logscale {
                if ticks.is_empty() {
                    tracing::debug!(a, b, "log placement rejected, falling back to linear");
                } else {
                    tracing::trace!(count = ticks.len(), "log placement accepted");
                }
            }
            if ticks.is_empty() {
                ticks = linear_ticks(a, b, pixels, pixels_per_tick, opts.labels_kmg2);
            }
            ticks
        }
    };
    apply_labels(&mut ticks, opts, ctx);
    ticks
}

/// `numeric_ticks` with log placement disabled regardless of `opts.logscale`.
pub fn numeric_linear_ticks(
    a: f64,
    b: f64,
    pixels: f64,
    opts: &TickerOptions,
    ctx: &dyn Any,
    forced_values: Option<&[f64]>,
) -> TickList {
    if opts.logscale {
        let linear = opts.clone().with_logscale(false);
        numeric_ticks(a, b, pixels, &linear, ctx, forced_values)
    } else {
        numeric_ticks(a, b, pixels, opts, ctx, forced_values)
    }
}
