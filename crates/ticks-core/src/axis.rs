// File: crates/ticks-core/src/axis.rs
// Summary: Axis model with label, range, kind and ticker options; picks the ticker for its data type.

use std::any::Any;

use crate::date::date_ticker;
use crate::numeric::numeric_ticks;
use crate::options::TickerOptions;
use crate::types::{tick_values, Tick, TickList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Data type plotted along the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Numeric,
    /// Milliseconds since epoch.
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
    pub options: TickerOptions,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: AxisKind::Numeric,
            options: TickerOptions::y_axis(),
        }
    }

    /// Time axis over `[min_ms, max_ms]`.
    pub fn date(label: impl Into<String>, min_ms: f64, max_ms: f64) -> Self {
        Self {
            label: label.into(),
            min: min_ms,
            max: max_ms,
            kind: AxisKind::Date,
            options: TickerOptions::x_axis(),
        }
    }

    pub fn default_x() -> Self {
        Self::date("Time", 0.0, 86_400_000.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    pub fn with_options(mut self, options: TickerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scale_kind(&self) -> ScaleKind {
        if self.options.logscale { ScaleKind::Log10 } else { ScaleKind::Linear }
    }

    pub fn set_scale_kind(&mut self, kind: ScaleKind) {
        self.options.logscale = kind == ScaleKind::Log10;
    }

    /// Ticks for the current range on an axis `pixels` long.
    pub fn ticks(&self, pixels: f64, ctx: &dyn Any) -> TickList {
        match self.kind {
            AxisKind::Numeric => numeric_ticks(self.min, self.max, pixels, &self.options, ctx, None),
            AxisKind::Date => date_ticker(self.min, self.max, pixels, &self.options, ctx),
        }
    }

    /// Label this (secondary) axis at the gridlines of a primary axis.
    /// Primary tick values are mapped linearly from `primary_range` onto this
    /// axis' range so both share gridlines.
    pub fn ticks_aligned_to(&self, primary: &[Tick], primary_range: (f64, f64), pixels: f64, ctx: &dyn Any) -> TickList {
        let (p0, p1) = primary_range;
        let span = p1 - p0;
        if span == 0.0 || !span.is_finite() {
            return Vec::new();
        }
        let forced: Vec<f64> = tick_values(primary)
            .into_iter()
            .map(|v| self.min + (v - p0) / span * (self.max - self.min))
            .collect();
        numeric_ticks(self.min, self.max, pixels, &self.options, ctx, Some(&forced))
    }
}
