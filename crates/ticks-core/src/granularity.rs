// File: crates/ticks-core/src/granularity.rs
// Summary: Date/time granularities, their tick placement table, and the granularity selector.

use std::fmt;
use std::str::FromStr;

use crate::error::{TickError, TickResult};
use crate::options::TickerOptions;

/// Step size of a date axis, ordered from finest to coarsest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Granularity {
    Millisecondly,
    TwoMillisecondly,
    FiveMillisecondly,
    TenMillisecondly,
    FiftyMillisecondly,
    HundredMillisecondly,
    FiveHundredMillisecondly,
    Secondly,
    TwoSecondly,
    FiveSecondly,
    TenSecondly,
    ThirtySecondly,
    Minutely,
    TwoMinutely,
    FiveMinutely,
    TenMinutely,
    ThirtyMinutely,
    Hourly,
    TwoHourly,
    SixHourly,
    Daily,
    TwoDaily,
    Weekly,
    Monthly,
    Quarterly,
    Biannual,
    Annual,
    Decadal,
    Centennial,
}

/// Calendar component stepped by a granularity, in `Date` constructor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl DateField {
    pub const COUNT: usize = 7;

    pub const ALL: [DateField; Self::COUNT] = [
        DateField::Year,
        DateField::Month,
        DateField::Day,
        DateField::Hour,
        DateField::Minute,
        DateField::Second,
        DateField::Millisecond,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Smallest legal value of the field (day of month starts at 1).
    #[inline]
    pub const fn min_value(self) -> i64 {
        match self {
            DateField::Day => 1,
            _ => 0,
        }
    }
}

/// Where ticks go for one granularity.
///
/// `datefield` starts on an even multiple of `step`. At or below `Hourly`
/// ticks are exactly `spacing` ms apart; coarser granularities step the
/// calendar field and use `spacing` only to estimate the tick count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlacement {
    pub datefield: DateField,
    pub step: i64,
    pub spacing: f64,
}

const SECOND: f64 = 1000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
// Mean Gregorian-ish year used for month-and-coarser estimates.
const YEAR: f64 = 365.2524 * DAY;

const fn placement(datefield: DateField, step: i64, spacing: f64) -> TickPlacement {
    TickPlacement { datefield, step, spacing }
}

/// Placement record per granularity, indexed by `Granularity::index()`.
pub const TICK_PLACEMENT: [TickPlacement; Granularity::COUNT] = [
    placement(DateField::Millisecond, 1, 1.0),
    placement(DateField::Millisecond, 2, 2.0),
    placement(DateField::Millisecond, 5, 5.0),
    placement(DateField::Millisecond, 10, 10.0),
    placement(DateField::Millisecond, 50, 50.0),
    placement(DateField::Millisecond, 100, 100.0),
    placement(DateField::Millisecond, 500, 500.0),
    placement(DateField::Second, 1, SECOND),
    placement(DateField::Second, 2, 2.0 * SECOND),
    placement(DateField::Second, 5, 5.0 * SECOND),
    placement(DateField::Second, 10, 10.0 * SECOND),
    placement(DateField::Second, 30, 30.0 * SECOND),
    placement(DateField::Minute, 1, MINUTE),
    placement(DateField::Minute, 2, 2.0 * MINUTE),
    placement(DateField::Minute, 5, 5.0 * MINUTE),
    placement(DateField::Minute, 10, 10.0 * MINUTE),
    placement(DateField::Minute, 30, 30.0 * MINUTE),
    placement(DateField::Hour, 1, HOUR),
    placement(DateField::Hour, 2, 2.0 * HOUR),
    placement(DateField::Hour, 6, 6.0 * HOUR),
    placement(DateField::Day, 1, DAY),
    placement(DateField::Day, 2, 2.0 * DAY),
    placement(DateField::Day, 7, 7.0 * DAY),
    placement(DateField::Month, 1, YEAR / 12.0),
    placement(DateField::Month, 3, YEAR / 4.0),
    placement(DateField::Month, 6, YEAR / 2.0),
    placement(DateField::Year, 1, YEAR),
    placement(DateField::Year, 10, 10.0 * YEAR),
    placement(DateField::Year, 100, 100.0 * YEAR),
];

impl Granularity {
    pub const COUNT: usize = 29;

    pub const ALL: [Granularity; Self::COUNT] = [
        Granularity::Millisecondly,
        Granularity::TwoMillisecondly,
        Granularity::FiveMillisecondly,
        Granularity::TenMillisecondly,
        Granularity::FiftyMillisecondly,
        Granularity::HundredMillisecondly,
        Granularity::FiveHundredMillisecondly,
        Granularity::Secondly,
        Granularity::TwoSecondly,
        Granularity::FiveSecondly,
        Granularity::TenSecondly,
        Granularity::ThirtySecondly,
        Granularity::Minutely,
        Granularity::TwoMinutely,
        Granularity::FiveMinutely,
        Granularity::TenMinutely,
        Granularity::ThirtyMinutely,
        Granularity::Hourly,
        Granularity::TwoHourly,
        Granularity::SixHourly,
        Granularity::Daily,
        Granularity::TwoDaily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Quarterly,
        Granularity::Biannual,
        Granularity::Annual,
        Granularity::Decadal,
        Granularity::Centennial,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> TickResult<Self> {
        Self::ALL.get(index).copied().ok_or(TickError::GranularityIndex(index))
    }

    #[inline]
    pub const fn placement(self) -> TickPlacement {
        TICK_PLACEMENT[self.index()]
    }

    /// Ticks are a constant number of milliseconds apart.
    #[inline]
    pub fn is_fixed_spacing(self) -> bool {
        self <= Granularity::Hourly
    }

    pub const fn name(self) -> &'static str {
        match self {
            Granularity::Millisecondly => "millisecondly",
            Granularity::TwoMillisecondly => "two_millisecondly",
            Granularity::FiveMillisecondly => "five_millisecondly",
            Granularity::TenMillisecondly => "ten_millisecondly",
            Granularity::FiftyMillisecondly => "fifty_millisecondly",
            Granularity::HundredMillisecondly => "hundred_millisecondly",
            Granularity::FiveHundredMillisecondly => "five_hundred_millisecondly",
            Granularity::Secondly => "secondly",
            Granularity::TwoSecondly => "two_secondly",
            Granularity::FiveSecondly => "five_secondly",
            Granularity::TenSecondly => "ten_secondly",
            Granularity::ThirtySecondly => "thirty_secondly",
            Granularity::Minutely => "minutely",
            Granularity::TwoMinutely => "two_minutely",
            Granularity::FiveMinutely => "five_minutely",
            Granularity::TenMinutely => "ten_minutely",
            Granularity::ThirtyMinutely => "thirty_minutely",
            Granularity::Hourly => "hourly",
            Granularity::TwoHourly => "two_hourly",
            Granularity::SixHourly => "six_hourly",
            Granularity::Daily => "daily",
            Granularity::TwoDaily => "two_daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::Biannual => "biannual",
            Granularity::Annual => "annual",
            Granularity::Decadal => "decadal",
            Granularity::Centennial => "centennial",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = TickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == want)
            .ok_or_else(|| TickError::UnknownGranularity(s.to_string()))
    }
}

/// Approximate number of ticks `granularity` would put on `[start, end]` (ms).
pub fn num_date_ticks(start: f64, end: f64, granularity: Granularity) -> f64 {
    ((end - start).abs() / granularity.placement().spacing).round()
}

/// Finest granularity whose estimated tick count still leaves
/// `pixels_per_label` per tick. `None` means even centennial ticks are too
/// dense for the axis.
pub fn pick_date_tick_granularity(
    a: f64,
    b: f64,
    pixels: f64,
    opts: &TickerOptions,
) -> Option<Granularity> {
    let pixels_per_tick = opts.pixels_per_label;
    let chosen = Granularity::ALL.iter().copied().find(|&g| {
        let n = num_date_ticks(a, b, g);
        pixels / n >= pixels_per_tick
    });
    match chosen {
        Some(g) => tracing::trace!(granularity = %g, pixels, "picked date granularity"),
        None => tracing::debug!(a, b, pixels, "no date granularity fits"),
    }
    chosen
}
