// File: crates/ticks-core/src/format.rs
// Summary: Built-in axis label formatters for numbers and dates, plus the number-to-text helpers they share.

use crate::calendar::{CalendarAccess, DateFields};
use crate::granularity::Granularity;
use crate::options::TickerOptions;

const KMB_LABELS: [&str; 5] = ["K", "M", "B", "T", "Q"];
const KMG2_BIG_LABELS: [&str; 8] = ["k", "M", "G", "T", "P", "E", "Z", "Y"];
const KMG2_SMALL_LABELS: [&str; 8] = ["m", "u", "n", "p", "f", "a", "z", "y"];

const SHORT_MONTH_NAMES: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Separator between day/month/year parts; keeps a label on one line.
const NBSP: char = '\u{a0}';

/// Round to `places` decimals, halves toward +infinity.
pub fn round_to(num: f64, places: i32) -> f64 {
    let shift = 10f64.powi(places);
    (num * shift + 0.5).floor() / shift
}

/// "9" -> "09".
pub fn zeropad(x: i64) -> String {
    if x < 10 { format!("0{x}") } else { x.to_string() }
}

/// Move Rust's `1.5e7` exponent syntax to `1.5e+7`.
fn signed_exponent(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// Shortest round-trip text, switching to exponent form outside `[1e-6, 1e21)`.
pub fn shortest_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let a = x.abs();
    if a >= 1e21 || a < 1e-6 {
        signed_exponent(format!("{x:e}"))
    } else {
        format!("{x}")
    }
}

/// Exponent notation with exactly `digits` fraction digits, e.g. `1.23e+7`.
pub fn to_exponential(x: f64, digits: usize) -> String {
    signed_exponent(format!("{x:.digits$e}"))
}

/// `precision` significant digits, in fixed or exponent form like `%g`.
pub fn to_precision(x: f64, precision: usize) -> String {
    let p = precision.max(1);
    let exp_form = format!("{:.*e}", p - 1, x);
    let e: i32 = exp_form
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    if e < -6 || e >= p as i32 {
        signed_exponent(exp_form)
    } else {
        let decimals = (p as i32 - 1 - e).max(0) as usize;
        format!("{x:.decimals$}")
    }
}

/// printf `%g`-like formatting; precision defaults to 2 and is clamped to 1..=21.
pub fn float_format(x: f64, precision: Option<u32>) -> String {
    let p = match precision {
        None | Some(0) => 2,
        Some(p) => p.clamp(1, 21),
    } as usize;
    if x.abs() < 1.0e-3 && x != 0.0 {
        to_exponential(x, p - 1)
    } else {
        to_precision(x, p)
    }
}

/// Text for a numeric value honoring `sig_figs`, `digits_after_decimal`,
/// `max_number_width` and the KMB/KMG2 suffix options.
pub fn number_value_formatter(x: f64, opts: &TickerOptions) -> String {
    if let Some(sig_figs) = opts.sig_figs {
        return float_format(x, Some(sig_figs));
    }

    let digits = opts.digits_after_decimal as i32;
    let max_width = opts.max_number_width as i32;

    let mut label = if x != 0.0
        && (x.abs() >= 10f64.powi(max_width) || x.abs() < 10f64.powi(-digits))
    {
        to_exponential(x, digits as usize)
    } else {
        shortest_number(round_to(x, digits))
    };

    if !(opts.labels_kmb || opts.labels_kmg2) {
        return label;
    }

    let (k, big, small): (f64, &[&str], &[&str]) = if opts.labels_kmg2 {
        if opts.labels_kmb {
            tracing::warn!("both labels_kmb and labels_kmg2 are set; using labels_kmg2");
        }
        (1024.0, &KMG2_BIG_LABELS, &KMG2_SMALL_LABELS)
    } else {
        (1000.0, &KMB_LABELS, &[])
    };

    let absx = x.abs();
    let mut n = k.powi(big.len() as i32);
    for suffix in big.iter().rev() {
        if absx >= n {
            label = format!("{}{}", shortest_number(round_to(x / n, digits)), suffix);
            break;
        }
        n /= k;
    }

    if opts.labels_kmg2 {
        let exp_form = format!("{x:e}");
        if let Some((mantissa, exp)) = exp_form.split_once("e-") {
            let mantissa: f64 = mantissa.parse().unwrap_or(0.0);
            let exp: i32 = exp.parse().unwrap_or(0);
            if (3..=24).contains(&exp) {
                label = if exp % 3 > 0 {
                    shortest_number(round_to(mantissa / 10f64.powi(exp % 3), digits))
                } else {
                    format!("{mantissa:.2}")
                };
                label.push_str(small[(exp / 3 - 1) as usize]);
            }
        }
    }

    label
}

/// Default label for a numeric axis tick.
pub fn number_axis_label_formatter(x: f64, opts: &TickerOptions) -> String {
    number_value_formatter(x, opts)
}

/// "HH:MM", "HH:MM:SS" or "HH:MM:SS.mmm" depending on which parts are set.
pub fn hms_string(hh: i64, mm: i64, ss: i64, ms: i64) -> String {
    let mut ret = format!("{}:{}", zeropad(hh), zeropad(mm));
    if ss != 0 {
        ret.push(':');
        ret.push_str(&zeropad(ss));
        if ms != 0 {
            ret.push_str(&format!(".{ms:03}"));
        }
    }
    ret
}

fn month_name(month0: i64) -> &'static str {
    SHORT_MONTH_NAMES[month0.rem_euclid(12) as usize]
}

/// Default label for a date axis tick, chosen by zoom level:
/// years at decade steps, "Mon YYYY" at month steps, "DD Mon" at day
/// boundaries and time of day below that.
pub fn date_axis_label_formatter(fields: &DateFields, granularity: Granularity) -> String {
    if granularity >= Granularity::Decadal {
        return fields.year().to_string();
    }
    if granularity >= Granularity::Monthly {
        return format!("{}{NBSP}{}", month_name(fields.month0()), fields.year());
    }
    if fields.time_of_day_millis() == 0 || granularity >= Granularity::Daily {
        format!("{}{NBSP}{}", zeropad(fields.day()), month_name(fields.month0()))
    } else if granularity < Granularity::Secondly {
        // seconds and milliseconds, e.g. "40.310"
        format!("{}.{:03}", zeropad(fields.second()), fields.millisecond())
    } else if granularity > Granularity::Minutely {
        hms_string(fields.hour(), fields.minute(), fields.second(), 0)
    } else {
        hms_string(fields.hour(), fields.minute(), fields.second(), fields.millisecond())
    }
}

/// "YYYY/MM/DD", with " HH:MM[:SS[.mmm]]" appended when the time of day is set.
pub fn date_value_formatter<C: CalendarAccess + ?Sized>(millis: i64, calendar: &C) -> Option<String> {
    let f = calendar.fields(millis)?;
    let mut ret = format!("{}/{}/{}", f.year(), zeropad(f.month0() + 1), zeropad(f.day()));
    if f.time_of_day_millis() != 0 {
        ret.push(' ');
        ret.push_str(&hms_string(f.hour(), f.minute(), f.second(), f.millisecond()));
    }
    Some(ret)
}
