//! Vocabulary partitioning into difficulty tiers
//!
//! Words built from common letters are easier to find, so each word is
//! scored by summing the vocabulary-wide frequency of its letters and the
//! sorted list is cut into three contiguous tiers.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Difficulty tier selecting which bucket secrets are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty name, defaulting to `Easy` for unknown input
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Error type for partitioning an empty vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyVocabularyError;

impl fmt::Display for EmptyVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot partition an empty vocabulary")
    }
}

impl std::error::Error for EmptyVocabularyError {}

/// Three disjoint difficulty tiers covering the whole vocabulary
///
/// Each word belongs to exactly one bucket; `hard` absorbs the remainder
/// when the vocabulary size is not divisible by three. Buckets near the
/// bottom can be empty for tiny vocabularies, in which case callers drawing
/// a secret fall back to the full list (see [`super::draw_secret`]).
#[derive(Debug, Clone)]
pub struct Buckets {
    easy: Vec<Word>,
    medium: Vec<Word>,
    hard: Vec<Word>,
}

impl Buckets {
    /// The bucket for a difficulty tier, ranked easiest-first within the tier
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &[Word] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Total number of words across all three buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }
}

/// Partition a vocabulary into easy/medium/hard buckets
///
/// # Algorithm
/// 1. Count, for each letter, how many words contain it (a letter repeated
///    within one word counts once).
/// 2. Score each word as the sum of its letters' counts (here repeats do
///    contribute multiple times).
/// 3. Sort descending by score, ties broken alphabetically so the result
///    does not depend on input order.
/// 4. Cut at `floor(n/3)`: the top third is easy, the next third medium,
///    and hard takes the rest.
///
/// # Errors
/// Returns `EmptyVocabularyError` for an empty word list; callers never
/// receive degenerate all-empty buckets silently.
///
/// # Examples
/// ```
/// use word_grid::core::Word;
/// use word_grid::vocab::{Difficulty, partition};
///
/// let words: Vec<Word> = ["CRANE", "SLATE", "JUMBO"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let buckets = partition(&words).unwrap();
/// assert_eq!(buckets.total(), 3);
/// assert_eq!(buckets.get(Difficulty::Easy).len(), 1);
/// ```
pub fn partition(words: &[Word]) -> Result<Buckets, EmptyVocabularyError> {
    if words.is_empty() {
        return Err(EmptyVocabularyError);
    }

    // Letter frequency over the vocabulary, distinct letters per word
    let mut freq: FxHashMap<u8, u32> = FxHashMap::default();
    for word in words {
        for letter in word.distinct_letters() {
            *freq.entry(letter).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(&Word, u32)> = words
        .iter()
        .map(|word| {
            let score = word
                .chars()
                .iter()
                .map(|ch| freq.get(ch).copied().unwrap_or(0))
                .sum();
            (word, score)
        })
        .collect();

    // Higher score = more common letters = easier
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.text().cmp(b.0.text())));

    let third = scored.len() / 3;
    let mut ranked = scored.into_iter().map(|(word, _)| word.clone());

    Ok(Buckets {
        easy: ranked.by_ref().take(third).collect(),
        medium: ranked.by_ref().take(third).collect(),
        hard: ranked.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn partition_empty_vocabulary_fails() {
        assert!(matches!(partition(&[]), Err(EmptyVocabularyError)));
    }

    #[test]
    fn partition_covers_whole_vocabulary() {
        let vocab = words(&[
            "CRANE", "SLATE", "ROBOT", "GUILT", "SPEED", "ALLEY", "MOUND", "JUMBO", "QUAKE",
            "FROST",
        ]);
        let buckets = partition(&vocab).unwrap();

        assert_eq!(buckets.total(), vocab.len());

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for difficulty in Difficulty::ALL {
            for word in buckets.get(difficulty) {
                assert!(seen.insert(word.text()), "duplicate {word}");
            }
        }
        assert_eq!(seen.len(), vocab.len());
    }

    #[test]
    fn partition_bucket_sizes() {
        // n = 10: third = 3, hard takes the remainder
        let vocab = words(&[
            "CRANE", "SLATE", "ROBOT", "GUILT", "SPEED", "ALLEY", "MOUND", "JUMBO", "QUAKE",
            "FROST",
        ]);
        let buckets = partition(&vocab).unwrap();

        assert_eq!(buckets.get(Difficulty::Easy).len(), 3);
        assert_eq!(buckets.get(Difficulty::Medium).len(), 3);
        assert_eq!(buckets.get(Difficulty::Hard).len(), 4);
    }

    #[test]
    fn partition_exact_thirds() {
        let vocab = words(&["CRANE", "SLATE", "ROBOT", "GUILT", "SPEED", "ALLEY"]);
        let buckets = partition(&vocab).unwrap();

        assert_eq!(buckets.get(Difficulty::Easy).len(), 2);
        assert_eq!(buckets.get(Difficulty::Medium).len(), 2);
        assert_eq!(buckets.get(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn partition_tiny_vocabulary_leaves_empty_buckets() {
        // n = 2: third = 0, everything lands in hard
        let vocab = words(&["CRANE", "JUMBO"]);
        let buckets = partition(&vocab).unwrap();

        assert!(buckets.get(Difficulty::Easy).is_empty());
        assert!(buckets.get(Difficulty::Medium).is_empty());
        assert_eq!(buckets.get(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn partition_is_deterministic() {
        let vocab = words(&[
            "CRANE", "SLATE", "ROBOT", "GUILT", "SPEED", "ALLEY", "MOUND",
        ]);
        let first = partition(&vocab).unwrap();
        let second = partition(&vocab).unwrap();

        for difficulty in Difficulty::ALL {
            let a: Vec<&str> = first.get(difficulty).iter().map(Word::text).collect();
            let b: Vec<&str> = second.get(difficulty).iter().map(Word::text).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn partition_order_independent() {
        // Alphabetical tie-break makes bucket contents input-order independent
        let forward = words(&["CRANE", "SLATE", "ROBOT", "GUILT", "SPEED", "ALLEY"]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = partition(&forward).unwrap();
        let b = partition(&reversed).unwrap();

        for difficulty in Difficulty::ALL {
            let xs: Vec<&str> = a.get(difficulty).iter().map(Word::text).collect();
            let ys: Vec<&str> = b.get(difficulty).iter().map(Word::text).collect();
            assert_eq!(xs, ys);
        }
    }

    #[test]
    fn common_letters_rank_easier() {
        // AAAAA shares its only letter with most of the list; JUMBO shares
        // almost nothing, so it must land in a harder tier than AAAAA.
        let vocab = words(&["AAAAA", "ABACK", "SALAD", "JUMBO", "ARENA", "BANAL"]);
        let buckets = partition(&vocab).unwrap();

        let tier_of = |target: &str| {
            Difficulty::ALL
                .into_iter()
                .position(|d| buckets.get(d).iter().any(|w| w.text() == target))
                .unwrap()
        };

        assert!(tier_of("AAAAA") < tier_of("JUMBO"));
    }

    #[test]
    fn repeated_letters_boost_word_score() {
        // Frequency counts each letter once per word, but a word's own score
        // counts repeats: AAAAA outscores ABCDE-style words on pure A's.
        let vocab = words(&["AAAAA", "ABIDE", "JUMBO"]);
        let buckets = partition(&vocab).unwrap();
        assert_eq!(buckets.get(Difficulty::Easy)[0].text(), "AAAAA");
    }

    #[test]
    fn difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("nonsense"), Difficulty::Easy);
    }

    #[test]
    fn difficulty_display_roundtrip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(&difficulty.to_string()), difficulty);
        }
    }
}
