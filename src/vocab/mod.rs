//! Vocabulary handling
//!
//! The bundled word list, loading of custom lists, and partitioning into
//! difficulty tiers that secrets are drawn from.

mod embedded;
pub mod loader;
mod partition;

pub use embedded::{WORDS, WORDS_COUNT};
pub use partition::{Buckets, Difficulty, EmptyVocabularyError, partition};

use crate::core::Word;
use rand::seq::IndexedRandom;

/// Draw a random secret for the given difficulty
///
/// Uses the difficulty's bucket, falling back to the full vocabulary when
/// the bucket is empty (tiny word lists). Returns `None` only if the
/// fallback list is empty too.
pub fn draw_secret<'a, R: rand::Rng + ?Sized>(
    buckets: &'a Buckets,
    difficulty: Difficulty,
    fallback: &'a [Word],
    rng: &mut R,
) -> Option<&'a Word> {
    let bucket = buckets.get(difficulty);
    if bucket.is_empty() {
        fallback.choose(rng)
    } else {
        bucket.choose(rng)
    }
}
