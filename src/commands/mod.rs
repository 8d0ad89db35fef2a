//! Command implementations

pub mod buckets;
pub mod score;
pub mod simple;

pub use buckets::{BucketSummary, TierSummary, summarize_buckets};
pub use score::{ScoreResult, score_words};
pub use simple::{GameStats, run_simple};
