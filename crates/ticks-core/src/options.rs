// File: crates/ticks-core/src/options.rs
// Summary: Typed ticker configuration and the axis label formatter callback.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calendar::DateFields;
use crate::error::{TickError, TickResult};
use crate::format;
use crate::granularity::Granularity;
use crate::types::{DEFAULT_X_PIXELS_PER_LABEL, DEFAULT_Y_PIXELS_PER_LABEL};

/// Value handed to a label formatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelInput {
    /// A numeric axis value.
    Number(f64),
    /// A date tick: its instant, its calendar fields (in the ticker's calendar)
    /// and the granularity the ticks were generated at.
    Date { millis: i64, fields: DateFields, granularity: Granularity },
}

/// Signature of a user supplied formatter. The `&dyn Any` is the caller's
/// chart context, passed through untouched.
pub type FormatterFn = dyn Fn(&LabelInput, &TickerOptions, &dyn Any) -> String + Send + Sync;

/// Label formatter for axis ticks.
#[derive(Clone, Default)]
pub enum AxisLabelFormatter {
    /// Built-in number or date formatting, chosen by the input kind.
    #[default]
    Default,
    Custom(Arc<FormatterFn>),
}

impl AxisLabelFormatter {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&LabelInput, &TickerOptions, &dyn Any) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn format(&self, input: &LabelInput, opts: &TickerOptions, ctx: &dyn Any) -> String {
        match self {
            Self::Default => match *input {
                LabelInput::Number(x) => format::number_axis_label_formatter(x, opts),
                LabelInput::Date { fields, granularity, .. } => {
                    format::date_axis_label_formatter(&fields, granularity)
                }
            },
            Self::Custom(f) => (f.as_ref())(input, opts, ctx),
        }
    }
}

impl fmt::Debug for AxisLabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Resolved options for one ticker invocation.
///
/// Loads from JSON with either snake_case or the chart's camelCase option
/// names; unknown keys are rejected.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickerOptions {
    /// Minimum pixel distance between adjacent labels.
    #[serde(alias = "pixelsPerLabel")]
    pub pixels_per_label: f64,
    pub logscale: bool,
    /// Base-16 tick spacing and binary-prefix labels.
    #[serde(alias = "labelsKMG2")]
    pub labels_kmg2: bool,
    #[serde(alias = "labelsKMB")]
    pub labels_kmb: bool,
    /// Read calendar fields in UTC instead of local time.
    #[serde(alias = "labelsUTC")]
    pub labels_utc: bool,
    #[serde(alias = "digitsAfterDecimal")]
    pub digits_after_decimal: u32,
    /// Numbers at or above `10^max_number_width` switch to exponent notation.
    #[serde(alias = "maxNumberWidth")]
    pub max_number_width: u32,
    /// Fixed significant figures; overrides the two settings above.
    #[serde(alias = "sigFigs")]
    pub sig_figs: Option<u32>,
    #[serde(skip)]
    pub axis_label_formatter: AxisLabelFormatter,
}

impl Default for TickerOptions {
    fn default() -> Self {
        Self {
            pixels_per_label: DEFAULT_X_PIXELS_PER_LABEL,
            logscale: false,
            labels_kmg2: false,
            labels_kmb: false,
            labels_utc: false,
            digits_after_decimal: 2,
            max_number_width: 6,
            sig_figs: None,
            axis_label_formatter: AxisLabelFormatter::Default,
        }
    }
}

impl TickerOptions {
    /// Defaults for a horizontal axis.
    pub fn x_axis() -> Self {
        Self::default()
    }

    /// Defaults for a vertical axis.
    pub fn y_axis() -> Self {
        Self { pixels_per_label: DEFAULT_Y_PIXELS_PER_LABEL, ..Self::default() }
    }

    pub fn with_pixels_per_label(mut self, px: f64) -> Self {
        self.pixels_per_label = px;
        self
    }

    pub fn with_logscale(mut self, on: bool) -> Self {
        self.logscale = on;
        self
    }

    pub fn with_labels_kmg2(mut self, on: bool) -> Self {
        self.labels_kmg2 = on;
        self
    }

    pub fn with_labels_kmb(mut self, on: bool) -> Self {
        self.labels_kmb = on;
        self
    }

    pub fn with_labels_utc(mut self, on: bool) -> Self {
        self.labels_utc = on;
        self
    }

    pub fn with_sig_figs(mut self, sig_figs: Option<u32>) -> Self {
        self.sig_figs = sig_figs;
        self
    }

    pub fn with_formatter(mut self, formatter: AxisLabelFormatter) -> Self {
        self.axis_label_formatter = formatter;
        self
    }

    /// Check the values the tickers rely on.
    pub fn validate(&self) -> TickResult<()> {
        if !self.pixels_per_label.is_finite() || self.pixels_per_label <= 0.0 {
            return Err(TickError::InvalidPixelsPerLabel(self.pixels_per_label));
        }
        if let Some(s) = self.sig_figs {
            if !(1..=21).contains(&s) {
                return Err(TickError::InvalidSigFigs(s));
            }
        }
        Ok(())
    }

    /// Label `input` with the configured formatter.
    pub fn format_label(&self, input: &LabelInput, ctx: &dyn Any) -> String {
        self.axis_label_formatter.format(input, self, ctx)
    }
}
