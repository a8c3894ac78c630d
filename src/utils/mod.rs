//! Utility helpers for demo data.

mod dataset;

pub use dataset::{generate_dataset, DatasetSpec};
