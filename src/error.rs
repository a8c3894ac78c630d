//! Error types for chartkit

use thiserror::Error;

/// Errors reported by catalog validation.
///
/// Every other operation in this crate is total and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartKitError {
    /// Two catalog entries share the same id
    #[error("duplicate selector id: {0}")]
    DuplicateSelectorId(String),

    /// A catalog entry has an empty caption
    #[error("selector entry '{0}' has an empty caption")]
    EmptyCaption(String),

    /// A catalog entry's thumbnail is not an http(s) URL
    #[error("selector entry '{id}' has an invalid thumbnail URL: {url}")]
    InvalidThumbnailUrl { id: String, url: String },
}

/// Result type for chartkit operations
pub type ChartKitResult<T> = Result<T, ChartKitError>;
