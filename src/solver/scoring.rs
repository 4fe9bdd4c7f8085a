//! Positional letter-frequency scoring
//!
//! A word scores the sum, over its positions, of how many current candidates share its
//! letter at that position. Repeated letters reveal less, so each duplicate costs 20% of
//! the raw sum.
//!
//! # Formula
//! score = trunc(raw × (1 - 0.2 × dup)), where dup = length - distinct letters
//!
//! The factor is not clamped: five or more duplicates give a zero or negative score.

use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Fraction of the raw score removed per repeated letter
pub const DUPLICATE_LETTER_PENALTY: f64 = 0.2;

/// Per-position letter counts over the current candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    positions: Vec<FxHashMap<u8, u32>>,
}

impl ScoreTable {
    /// Build a fresh table from `candidates`
    ///
    /// Only the first `word_size` letters of each word are counted.
    #[must_use]
    pub fn build(word_size: usize, candidates: &[Word]) -> Self {
        let mut positions = vec![FxHashMap::default(); word_size];

        for word in candidates {
            for (counts, &letter) in positions.iter_mut().zip(word.letters()) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        Self { positions }
    }

    /// Number of candidates with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.positions
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Number of positions tracked (the word size)
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of the per-position maximum counts
    ///
    /// The best raw score any word could reach; 0 for an empty candidate set.
    #[must_use]
    pub fn max_score(&self) -> i64 {
        self.positions
            .iter()
            .map(|counts| i64::from(counts.values().copied().max().unwrap_or(0)))
            .sum()
    }

    /// Sum of this table's counts for each of the word's letters, before any penalty
    #[must_use]
    pub fn raw_score(&self, word: &Word) -> i64 {
        word.letters()
            .iter()
            .take(self.len())
            .enumerate()
            .map(|(position, &letter)| i64::from(self.count(position, letter)))
            .sum()
    }

    /// Score a word, applying the duplicate-letter penalty
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    /// use wordle_ranker::solver::ScoreTable;
    ///
    /// let words = vec![Word::new("crane", 5).unwrap(), Word::new("trace", 5).unwrap()];
    /// let table = ScoreTable::build(5, &words);
    ///
    /// // C=1, R=2, A=2, N=1, E=2
    /// assert_eq!(table.score(&words[0]), 8);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word) -> i64 {
        apply_duplicate_penalty(self.raw_score(word), word.duplicate_count())
    }
}

/// Scale a raw score by `1 - 0.2 × duplicates`, truncating toward zero
#[must_use]
pub fn apply_duplicate_penalty(raw: i64, duplicates: usize) -> i64 {
    if duplicates == 0 {
        return raw;
    }

    let multiplier = 1.0 - duplicates as f64 * DUPLICATE_LETTER_PENALTY;
    (multiplier * raw as f64) as i64
}

/// A candidate paired with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub score: i64,
    pub word: Word,
}

impl ScoredWord {
    /// Fraction of `max_score` reached, or 0 when `max_score` is 0
    #[must_use]
    pub fn fraction(&self, max_score: i64) -> f64 {
        if max_score > 0 {
            self.score as f64 / max_score as f64
        } else {
            0.0
        }
    }
}

/// Ranking order: higher score first, ties broken by the lexically smaller word
#[must_use]
pub fn compare_ranked(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word))
}

/// Score every candidate against `table` and sort by `compare_ranked`
#[must_use]
pub fn rank(table: &ScoreTable, candidates: &[Word]) -> Vec<ScoredWord> {
    let mut ranked: Vec<ScoredWord> = candidates
        .par_iter()
        .map(|word| ScoredWord {
            score: table.score(word),
            word: word.clone(),
        })
        .collect();

    ranked.par_sort_by(compare_ranked);
    ranked
}
