//! Vocabulary partition summary command
//!
//! Partitions a vocabulary into difficulty tiers and reports tier sizes
//! with a few sample words from each.

use crate::core::Word;
use crate::vocab::{Difficulty, partition};

/// Summary of one difficulty tier
pub struct TierSummary {
    pub difficulty: Difficulty,
    pub size: usize,
    pub samples: Vec<String>,
}

/// Result of partitioning a vocabulary
pub struct BucketSummary {
    pub total: usize,
    pub tiers: Vec<TierSummary>,
}

/// Partition a vocabulary and summarize the tiers
///
/// `sample_count` caps how many words are listed per tier; the samples are
/// the easiest-ranked words within each tier.
///
/// # Errors
///
/// Returns an error if the vocabulary is empty.
pub fn summarize_buckets(words: &[Word], sample_count: usize) -> Result<BucketSummary, String> {
    let buckets = partition(words).map_err(|e| e.to_string())?;

    let tiers = Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let bucket = buckets.get(difficulty);
            TierSummary {
                difficulty,
                size: bucket.len(),
                samples: bucket
                    .iter()
                    .take(sample_count)
                    .map(|w| w.text().to_string())
                    .collect(),
            }
        })
        .collect();

    Ok(BucketSummary {
        total: buckets.total(),
        tiers,
    })
}
