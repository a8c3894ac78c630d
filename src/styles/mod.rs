//! Style/config registry: the default visual parameters for chart rendering.

mod chart;
mod palette;

pub use chart::{
    BarChartStyleOverrides, BarChartStyles, ChartStyleOverrides, ChartStyles, LineChartStyles,
    Padding, PaddingOverrides,
};
pub use palette::Palette;
