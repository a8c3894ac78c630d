//! # Chart Styling and Sample Data Library
//!
//! `chartkit` is the shared source of visual defaults for chart rendering.
//! It provides the default style configuration for line and bar charts, the
//! semantic color palette behind those defaults, the catalog of chart presets
//! offered by a selector UI, and a small synthetic dataset generator for
//! feeding demo charts with placeholder values.
//!
//! ## Features
//!
//! - Canonical default styles for line and bar charts, derived from one base
//! - Field-by-field resolution of partial style overrides
//! - Semantic color palette shared across chart kinds
//! - Ordered, validated catalog of selectable chart presets
//! - Pseudo-random placeholder datasets for demo rendering
//!
//! Everything here is plain data: no rendering, no I/O, no shared mutable
//! state. Registry values are safe for unrestricted concurrent reads.
//!
//! ## Example
//!
//! ```
//! use chartkit::{generate_dataset, BarChartStyles, ChartStyleOverrides, ChartStyles};
//!
//! // Defaults for a line chart, with the width overridden.
//! let styles = ChartStyleOverrides {
//!     width: Some(800),
//!     ..Default::default()
//! }
//! .resolve();
//! assert_eq!(styles.height, ChartStyles::default().height);
//!
//! // Bar charts share the same base defaults.
//! assert_eq!(BarChartStyles::default().chart, ChartStyles::default());
//!
//! // Placeholder data for a demo chart.
//! let values = generate_dataset(10, 0.0, 10.0);
//! assert_eq!(values.len(), 10);
//! ```

pub mod error;
pub mod selector;
pub mod styles;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use error::{ChartKitError, ChartKitResult};
pub use selector::{find_item, selector_catalog, validate_catalog, ChartSelectorItem};
pub use styles::{
    BarChartStyleOverrides, BarChartStyles, ChartStyleOverrides, ChartStyles, LineChartStyles,
    Padding, PaddingOverrides, Palette,
};
pub use types::{LabeledSeries, RealtimePoint, TemperatureReading};
pub use utils::{generate_dataset, DatasetSpec};
