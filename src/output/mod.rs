//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_bucket_summary, print_score_result};
