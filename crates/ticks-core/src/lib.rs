// File: crates/ticks-core/src/lib.rs
// Summary: Tick engine entry point; exports numeric and date/time axis tickers.

pub mod axis;
pub mod calendar;
pub mod date;
pub mod error;
pub mod format;
pub mod granularity;
pub mod numeric;
pub mod options;
pub mod types;

pub use axis::{Axis, AxisKind, ScaleKind};
pub use calendar::{Calendar, CalendarAccess, DateFields, ZonedCalendar};
pub use date::{date_ticker, date_ticker_in, get_date_axis, get_date_axis_in, DateTickWalker};
pub use error::{TickError, TickResult};
pub use granularity::{num_date_ticks, pick_date_tick_granularity, DateField, Granularity, TickPlacement};
pub use numeric::{numeric_linear_ticks, numeric_ticks, preferred_log_tick_values};
pub use options::{AxisLabelFormatter, LabelInput, TickerOptions};
pub use types::{Tick, TickList};
