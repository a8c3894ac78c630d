//! # Sample Data Shapes
//!
//! This module contains the data-shape contracts consumed by external
//! rendering code. They carry no behavior of their own; chart renderers
//! construct and plot them, this crate only defines the shapes.

use serde::{Deserialize, Serialize};

/// A single sample of a realtime series.
///
/// `time` is whatever clock the feeding code uses (typically milliseconds
/// since an epoch); this crate does not interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealtimePoint {
    /// Sample timestamp
    pub time: f64,
    /// Sampled value
    pub value: f64,
}

impl RealtimePoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// A labeled list of values of a caller-chosen element type.
///
/// The element type is an explicit parameter; callers pick it per series
/// (numbers for most charts, richer records for annotated ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries<T> {
    /// Optional display label for the series
    pub label: Option<String>,
    /// The series values, in plot order
    pub values: Vec<T>,
}

impl<T> LabeledSeries<T> {
    /// Create a series with a label.
    pub fn new(label: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            label: Some(label.into()),
            values,
        }
    }

    /// Create a series without a label.
    pub fn unlabeled(values: Vec<T>) -> Self {
        Self {
            label: None,
            values,
        }
    }
}

/// A date/temperature pair used by mockup weather charts.
///
/// Both fields are opaque display strings; no date arithmetic or unit
/// handling happens on this side of the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Display date, e.g. "2023-01-01"
    pub date: String,
    /// Display temperature, e.g. "21.5"
    pub temperature: String,
}
