//! Semantic color palette shared by all chart kinds.

use serde::{Deserialize, Serialize};

/// Fixed mapping from semantic color role to a hex color value.
///
/// Renderers look colors up by role rather than hard-coding hex values, so
/// every chart kind shares one visual language. The palette is plain data;
/// hex strings are passed through to the rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary accent color
    pub primary: String,
    /// Secondary accent color
    pub secondary: String,
    /// Page/chart background color
    pub background: String,
    /// Default text color
    pub text: String,
    /// Default stroke/fill color for chart marks
    pub chart_primary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#b87131".to_string(),
            secondary: "#ffdbab".to_string(),
            background: "#fdfcdb".to_string(),
            text: "#3c3d1b".to_string(),
            chart_primary: "#4682B4".to_string(),
        }
    }
}
