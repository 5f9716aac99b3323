// File: crates/ticks-core/src/date.rs
// Summary: Date/time axis ticker: walks calendar state at a chosen granularity and labels each tick.
// Notes:
// - At or below HOURLY the walk adds a fixed number of milliseconds and
//   re-reads the fields from the new instant.
// - Coarser granularities bump one calendar field and re-materialize the
//   instant from the field array every step. That is what keeps ticks on
//   real local times across DST changes; never carry a cached instant over.

use std::any::Any;

use crate::calendar::{Calendar, CalendarAccess, DateFields};
use crate::granularity::{pick_date_tick_granularity, DateField, Granularity, TickPlacement};
use crate::options::{LabelInput, TickerOptions};
use crate::types::{Tick, TickList};

enum Walk {
    /// Constant spacing in ms.
    Fixed { spacing: i64 },
    /// Calendar stepping; `fields` is the unnormalized candidate.
    Calendar { fields: DateFields },
}

/// Iterator over the tick instants of `[start, end]` at one granularity,
/// yielding `(millis, fields)` with fields read back from `millis`.
pub struct DateTickWalker<'c, C: CalendarAccess + ?Sized> {
    calendar: &'c C,
    granularity: Granularity,
    placement: TickPlacement,
    end: f64,
    walk: Walk,
    /// Next candidate instant; `None` once finished.
    next: Option<i64>,
}

impl<'c, C: CalendarAccess + ?Sized> DateTickWalker<'c, C> {
    pub fn new(start: f64, end: f64, granularity: Granularity, calendar: &'c C) -> Self {
        let placement = granularity.placement();
        let mut walker = Self {
            calendar,
            granularity,
            placement,
            end,
            walk: Walk::Fixed { spacing: placement.spacing as i64 },
            next: None,
        };
        if !(start.is_finite() && end.is_finite()) {
            return walker;
        }

        let start_ms = start.trunc() as i64;
        let Some(mut fields) = calendar.fields(start_ms) else { return walker };

        // Snap back to a tick boundary; weekly ticks land on Sundays.
        let datefield = placement.datefield;
        let offset = if granularity == Granularity::Weekly {
            match calendar.day_of_week(start_ms) {
                Some(dow) => dow as i64,
                None => return walker,
            }
        } else {
            fields[datefield] % placement.step
        };
        fields[datefield] -= offset;
        fields.truncate_below(datefield);

        let Some(mut tick) = calendar.make_date(&fields) else { return walker };

        if granularity.is_fixed_spacing() {
            let spacing = placement.spacing as i64;
            if (tick as f64) < start {
                tick += spacing;
            }
        } else {
            if (tick as f64) < start {
                fields[datefield] += placement.step;
                let Some(t) = calendar.make_date(&fields) else { return walker };
                tick = t;
            }
            walker.walk = Walk::Calendar { fields };
        }
        walker.next = Some(tick);
        walker
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    fn advance(&mut self, current: i64) -> Option<i64> {
        match &mut self.walk {
            Walk::Fixed { spacing } => current.checked_add(*spacing),
            Walk::Calendar { fields } => {
                fields[self.placement.datefield] += self.placement.step;
                self.calendar.make_date(fields)
            }
        }
    }
}

impl<C: CalendarAccess + ?Sized> Iterator for DateTickWalker<'_, C> {
    type Item = (i64, DateFields);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let tick = self.next?;
            if tick as f64 > self.end {
                self.next = None;
                return None;
            }
            self.next = self.advance(tick);
            let Some(fields) = self.calendar.fields(tick) else {
                self.next = None;
                return None;
            };
            let emit = match self.walk {
                Walk::Fixed { .. } => true,
                Walk::Calendar { .. } => {
                    self.granularity >= Granularity::Daily
                        || fields[DateField::Hour] % self.placement.step == 0
                }
            };
            if emit {
                return Some((tick, fields));
            }
        }
    }
}

/// Labeled ticks on `[start, end]` at `granularity`, reading fields through `calendar`.
pub fn get_date_axis_in<C: CalendarAccess + ?Sized>(
    start: f64,
    end: f64,
    granularity: Granularity,
    opts: &TickerOptions,
    ctx: &dyn Any,
    calendar: &C,
) -> TickList {
    DateTickWalker::new(start, end, granularity, calendar)
        .map(|(millis, fields)| {
            let input = LabelInput::Date { millis, fields, granularity };
            Tick::labeled(millis as f64, opts.format_label(&input, ctx))
        })
        .collect()
}

/// Labeled ticks on `[start, end]` at `granularity` in the UTC or local
/// calendar, per `opts.labels_utc`.
pub fn get_date_axis(
    start: f64,
    end: f64,
    granularity: Granularity,
    opts: &TickerOptions,
    ctx: &dyn Any,
) -> TickList {
    get_date_axis_in(start, end, granularity, opts, ctx, &Calendar::for_options(opts))
}

/// Ticks for a time axis over `[a, b]` (ms since epoch) that is `pixels` long.
/// A reversed range yields the same ticks in descending order.
pub fn date_ticker_in<C: CalendarAccess + ?Sized>(
    a: f64,
    b: f64,
    pixels: f64,
    opts: &TickerOptions,
    ctx: &dyn Any,
    calendar: &C,
) -> TickList {
    if !(a.is_finite() && b.is_finite() && pixels.is_finite())
        || pixels <= 0.0
        || a == b
        || !(opts.pixels_per_label > 0.0)
    {
        tracing::debug!(a, b, pixels, "degenerate date range, no ticks");
        return Vec::new();
    }
    let Some(granularity) = pick_date_tick_granularity(a, b, pixels, opts) else {
        return Vec::new();
    };
    if a <= b {
        get_date_axis_in(a, b, granularity, opts, ctx, calendar)
    } else {
        let mut ticks = get_date_axis_in(b, a, granularity, opts, ctx, calendar);
        ticks.reverse();
        ticks
    }
}

/// `date_ticker_in` with the calendar chosen by `opts.labels_utc`.
pub fn date_ticker(a: f64, b: f64, pixels: f64, opts: &TickerOptions, ctx: &dyn Any) -> TickList {
    date_ticker_in(a, b, pixels, opts, ctx, &Calendar::for_options(opts))
}
