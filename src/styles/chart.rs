//! Default chart style configuration.
//!
//! One canonical set of defaults is shared by every chart kind: line charts
//! use it as-is, bar charts widen it with a single extra spacing field.
//! Callers that want to deviate supply a partial override; anything left
//! unspecified falls back to the default field-by-field, padding included.

use serde::{Deserialize, Serialize};

use super::palette::Palette;

/// Inner padding of the chart container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 40,
            bottom: 20,
            left: 50,
            right: 20,
        }
    }
}

/// Base chart style configuration.
///
/// Colors are hex strings taken from the default [`Palette`]; dimensions are
/// pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyles {
    pub width: u32,
    pub height: u32,
    /// Stroke/fill color for chart marks
    pub color: String,
    pub background_color: String,
    pub container_padding: Padding,
}

impl Default for ChartStyles {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            width: 500,
            height: 300,
            color: palette.chart_primary,
            background_color: palette.background,
            container_padding: Padding::default(),
        }
    }
}

/// Bar chart style configuration: the base style plus bar spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartStyles {
    #[serde(flatten)]
    pub chart: ChartStyles,
    /// Spacing between adjacent bars, in pixels
    pub bar_padding: f64,
}

impl BarChartStyles {
    /// Widen an arbitrary base style with the default bar spacing.
    pub fn from_base(chart: ChartStyles) -> Self {
        Self {
            chart,
            bar_padding: 5.0,
        }
    }
}

impl Default for BarChartStyles {
    fn default() -> Self {
        Self::from_base(ChartStyles::default())
    }
}

/// Line chart style configuration.
///
/// Structurally identical to [`ChartStyles`]; the distinct name keeps line
/// chart call sites readable.
pub type LineChartStyles = ChartStyles;

/// Partial override of [`Padding`]. Unset fields keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingOverrides {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl PaddingOverrides {
    /// Resolve against a base padding, field-by-field.
    pub fn apply_to(&self, base: &Padding) -> Padding {
        Padding {
            top: self.top.unwrap_or(base.top),
            bottom: self.bottom.unwrap_or(base.bottom),
            left: self.left.unwrap_or(base.left),
            right: self.right.unwrap_or(base.right),
        }
    }
}

/// Partial override of [`ChartStyles`].
///
/// Deserializes from a partial document: every field, including each nested
/// padding field, is individually optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyleOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub container_padding: PaddingOverrides,
}

impl ChartStyleOverrides {
    /// Resolve against a base style. Unset fields keep the base value;
    /// padding merges per field, not as a block.
    pub fn apply_to(&self, base: &ChartStyles) -> ChartStyles {
        ChartStyles {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| base.background_color.clone()),
            container_padding: self.container_padding.apply_to(&base.container_padding),
        }
    }

    /// Resolve against the default style.
    pub fn resolve(&self) -> ChartStyles {
        self.apply_to(&ChartStyles::default())
    }
}

/// Partial override of [`BarChartStyles`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartStyleOverrides {
    #[serde(flatten)]
    pub chart: ChartStyleOverrides,
    pub bar_padding: Option<f64>,
}

impl BarChartStyleOverrides {
    /// Resolve against a base style. Unset fields keep the base value.
    pub fn apply_to(&self, base: &BarChartStyles) -> BarChartStyles {
        BarChartStyles {
            chart: self.chart.apply_to(&base.chart),
            bar_padding: self.bar_padding.unwrap_or(base.bar_padding),
        }
    }

    /// Resolve against the default bar chart style.
    pub fn resolve(&self) -> BarChartStyles {
        self.apply_to(&BarChartStyles::default())
    }
}
