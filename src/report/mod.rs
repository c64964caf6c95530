//! Aggregates test results for the presentation layer.

mod summary;

pub use summary::{Summary, overall_success, summarize};
