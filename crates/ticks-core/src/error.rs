// File: crates/ticks-core/src/error.rs
// Summary: Error type for the few reportable conditions (option validation, granularity lookup).
// Tick computation itself never fails: degenerate input yields an empty tick list.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TickError {
    #[error("pixels per label must be finite and positive, got {0}")]
    InvalidPixelsPerLabel(f64),

    #[error("significant figures must be within 1..=21, got {0}")]
    InvalidSigFigs(u32),

    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),

    #[error("granularity index out of range: {0}")]
    GranularityIndex(usize),
}

pub type TickResult<T> = Result<T, TickError>;
