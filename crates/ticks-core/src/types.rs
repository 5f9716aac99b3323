// File: crates/ticks-core/src/types.rs
// Summary: Shared types and constants (tick, tick list, default label budgets).

use serde::Serialize;

/// Default minimum pixels per label on a horizontal (usually time) axis.
pub const DEFAULT_X_PIXELS_PER_LABEL: f64 = 70.0;
/// Default minimum pixels per label on a vertical (value) axis.
pub const DEFAULT_Y_PIXELS_PER_LABEL: f64 = 30.0;

/// One entry of a tick list.
/// Contract:
/// - `v` absent means a label-only tick (positioned by `label_v`).
/// - `label` absent or empty means a gridline without visible text.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tick {
    pub v: Option<f64>,
    pub label: Option<String>,
    /// Reserved: alternate label position. Never produced by the tickers here.
    pub label_v: Option<f64>,
}

impl Tick {
    /// Gridline at `v`, label to be filled in later.
    pub const fn at(v: f64) -> Self {
        Self { v: Some(v), label: None, label_v: None }
    }

    pub fn labeled(v: f64, label: impl Into<String>) -> Self {
        Self { v: Some(v), label: Some(label.into()), label_v: None }
    }

    /// Label-only tick drawn at `label_v` without a gridline.
    pub fn label_only(label_v: f64, label: impl Into<String>) -> Self {
        Self { v: None, label: Some(label.into()), label_v: Some(label_v) }
    }

    /// True when the tick carries visible text.
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Ordered ticks, following the direction of the requested range.
pub type TickList = Vec<Tick>;

/// Collect the `v` values of a tick list, skipping label-only ticks.
pub fn tick_values(ticks: &[Tick]) -> Vec<f64> {
    ticks.iter().filter_map(|t| t.v).collect()
}
