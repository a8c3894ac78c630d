//! Chart-selector catalog.
//!
//! The ordered list of chart presets a selector UI offers for preview. Each
//! entry pairs a stable id with a thumbnail URL and a caption; the order of
//! the list is the display order. Thumbnails are plain strings here, fetching
//! them is the UI's business.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ChartKitError, ChartKitResult};

/// One selectable chart preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSelectorItem {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Preview image URL
    pub thumbnail: String,
    /// Display caption
    pub caption: String,
}

impl ChartSelectorItem {
    pub fn new(
        id: impl Into<String>,
        thumbnail: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thumbnail: thumbnail.into(),
            caption: caption.into(),
        }
    }
}

static SELECTOR_CATALOG: Lazy<Vec<ChartSelectorItem>> = Lazy::new(|| {
    vec![
        ChartSelectorItem::new(
            "simple-line-chart",
            "https://firebasestorage.googleapis.com/v0/b/d3-playground-a2874.appspot.com/o/line_chart_min.png?alt=media",
            "Simple line chart",
        ),
        ChartSelectorItem::new(
            "simple-bar-chart",
            "https://firebasestorage.googleapis.com/v0/b/d3-playground-a2874.appspot.com/o/bar_chart_min.png?alt=media",
            "Simple bar chart",
        ),
        ChartSelectorItem::new(
            "realtime-line-chart",
            "https://firebasestorage.googleapis.com/v0/b/d3-playground-a2874.appspot.com/o/line_chart_min.png?alt=media",
            "Realtime line chart",
        ),
    ]
});

/// The built-in catalog, in display order.
pub fn selector_catalog() -> &'static [ChartSelectorItem] {
    &SELECTOR_CATALOG
}

/// Look up a catalog entry by id.
pub fn find_item(id: &str) -> Option<&'static ChartSelectorItem> {
    SELECTOR_CATALOG.iter().find(|item| item.id == id)
}

/// Check catalog invariants: unique ids, non-empty captions, http(s)
/// thumbnail URLs.
///
/// The built-in catalog always passes; callers substituting their own
/// content can run the same checks over it.
pub fn validate_catalog(items: &[ChartSelectorItem]) -> ChartKitResult<()> {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(ChartKitError::DuplicateSelectorId(item.id.clone()));
        }
        if item.caption.trim().is_empty() {
            return Err(ChartKitError::EmptyCaption(item.id.clone()));
        }
        if !item.thumbnail.starts_with("http://") && !item.thumbnail.starts_with("https://") {
            return Err(ChartKitError::InvalidThumbnailUrl {
                id: item.id.clone(),
                url: item.thumbnail.clone(),
            });
        }
    }
    Ok(())
}
