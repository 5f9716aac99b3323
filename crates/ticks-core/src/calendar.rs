// File: crates/ticks-core/src/calendar.rs
// Summary: Calendar field tuple and the UTC/local (or any chrono zone) calendar strategy.
// Notes:
// - Fields are plain integers and may run out of range while stepping
//   (month 13, day 32, ...). Materialization rolls the excess into the next
//   coarser field, so stepping never needs calendar arithmetic of its own.
// - Local times that fall into a DST gap resolve with the offset in force
//   before the gap; repeated local times resolve to the earlier instant.

use std::ops::{Index, IndexMut};

use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike,
    Utc,
};

use crate::granularity::DateField;
use crate::options::TickerOptions;

/// Calendar components `[year, month0, day, hour, minute, second, millisecond]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DateFields(pub [i64; DateField::COUNT]);

impl DateFields {
    /// Month is 0-based, day of month 1-based.
    pub const fn new(year: i64, month0: i64, day: i64, hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        Self([year, month0, day, hour, minute, second, millisecond])
    }

    pub const fn year(&self) -> i64 { self.0[0] }
    pub const fn month0(&self) -> i64 { self.0[1] }
    pub const fn day(&self) -> i64 { self.0[2] }
    pub const fn hour(&self) -> i64 { self.0[3] }
    pub const fn minute(&self) -> i64 { self.0[4] }
    pub const fn second(&self) -> i64 { self.0[5] }
    pub const fn millisecond(&self) -> i64 { self.0[6] }

    /// Reset every field finer than `field` to its minimum.
    pub fn truncate_below(&mut self, field: DateField) {
        for df in DateField::ALL.iter().copied().filter(|df| *df > field) {
            self[df] = df.min_value();
        }
    }

    /// Milliseconds since local midnight, ignoring rollover.
    pub fn time_of_day_millis(&self) -> i64 {
        ((self.hour() * 60 + self.minute()) * 60 + self.second()) * 1000 + self.millisecond()
    }
}

impl Index<DateField> for DateFields {
    type Output = i64;
    fn index(&self, field: DateField) -> &i64 {
        &self.0[field.index()]
    }
}

impl IndexMut<DateField> for DateFields {
    fn index_mut(&mut self, field: DateField) -> &mut i64 {
        &mut self.0[field.index()]
    }
}

/// Normalize possibly out-of-range fields into a wall-clock datetime.
/// Returns `None` only when the result leaves chrono's representable range.
pub fn civil_from_fields(fields: &DateFields) -> Option<NaiveDateTime> {
    let year = fields.year().checked_add(fields.month0().div_euclid(12))?;
    let month = fields.month0().rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(fields.day() - 1)?)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(TimeDelta::try_milliseconds(fields.time_of_day_millis())?)
}

/// Strategy for reading and building calendar dates.
pub trait CalendarAccess {
    /// Calendar fields of the instant `millis` (ms since epoch).
    fn fields(&self, millis: i64) -> Option<DateFields>;
    /// Day of week of `millis`, 0 = Sunday.
    fn day_of_week(&self, millis: i64) -> Option<u32>;
    /// Instant (ms since epoch) of `fields`, with rollover.
    fn make_date(&self, fields: &DateFields) -> Option<i64>;
}

/// Calendar in a chrono time zone.
#[derive(Clone, Debug)]
pub struct ZonedCalendar<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> ZonedCalendar<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    fn datetime(&self, millis: i64) -> Option<DateTime<Tz>> {
        self.tz.timestamp_millis_opt(millis).single()
    }
}

impl<Tz: TimeZone> CalendarAccess for ZonedCalendar<Tz> {
    fn fields(&self, millis: i64) -> Option<DateFields> {
        let dt = self.datetime(millis)?;
        Some(DateFields::new(
            dt.year() as i64,
            dt.month0() as i64,
            dt.day() as i64,
            dt.hour() as i64,
            dt.minute() as i64,
            dt.second() as i64,
            (dt.nanosecond() / 1_000_000).min(999) as i64,
        ))
    }

    fn day_of_week(&self, millis: i64) -> Option<u32> {
        self.datetime(millis).map(|dt| dt.weekday().num_days_from_sunday())
    }

    fn make_date(&self, fields: &DateFields) -> Option<i64> {
        let naive = civil_from_fields(fields)?;
        if let Some(dt) = self.tz.from_local_datetime(&naive).earliest() {
            return Some(dt.timestamp_millis());
        }
        // Skipped local time: DST gaps never span a day, so the offset a day
        // earlier is the one in force before the gap.
        let before = naive.checked_sub_signed(TimeDelta::try_days(1)?)?;
        let offset = self.tz.offset_from_local_datetime(&before).earliest()?.fix();
        let utc = naive.checked_sub_signed(TimeDelta::try_seconds(offset.local_minus_utc() as i64)?)?;
        Some(utc.and_utc().timestamp_millis())
    }
}

/// Built-in calendars selected by `labels_utc`.
#[derive(Clone, Debug)]
pub enum Calendar {
    Utc(ZonedCalendar<Utc>),
    Local(ZonedCalendar<Local>),
}

impl Calendar {
    pub fn utc() -> Self {
        Calendar::Utc(ZonedCalendar::new(Utc))
    }

    pub fn local() -> Self {
        Calendar::Local(ZonedCalendar::new(Local))
    }

    pub fn for_options(opts: &TickerOptions) -> Self {
        if opts.labels_utc { Self::utc() } else { Self::local() }
    }
}

impl CalendarAccess for Calendar {
    fn fields(&self, millis: i64) -> Option<DateFields> {
        match self {
            Calendar::Utc(c) => c.fields(millis),
            Calendar::Local(c) => c.fields(millis),
        }
    }

    fn day_of_week(&self, millis: i64) -> Option<u32> {
        match self {
            Calendar::Utc(c) => c.day_of_week(millis),
            Calendar::Local(c) => c.day_of_week(millis),
        }
    }

    fn make_date(&self, fields: &DateFields) -> Option<i64> {
        match self {
            Calendar::Utc(c) => c.make_date(fields),
            Calendar::Local(c) => c.make_date(fields),
        }
    }
}
