//! Main solver interface

use super::filter::filter_words;
use super::scoring::{ScoreTable, ScoredWord, rank};
use crate::core::{
    ConstraintError, Constraints, PositionedLetter, Word, sanitize_absent, sanitize_correct,
    sanitize_wrong,
};
use log::{debug, warn};

/// Largest word size whose positions all fit the single-digit encoding
const MAX_ENCODABLE_WORD_SIZE: usize = 10;

/// Filter-and-rank solver
///
/// Owns the loaded word list, the accumulated constraints and the derived state
/// (candidates, score table, ranking). Constraints accumulate through the `add_*`
/// methods; nothing is recomputed until `filter_candidates` is called.
#[derive(Debug, Clone)]
pub struct Solver {
    word_size: usize,
    all_words: Vec<Word>,
    constraints: Constraints,
    candidates: Vec<Word>,
    score_table: ScoreTable,
    ranking: Vec<ScoredWord>,
}

impl Solver {
    /// Create a solver over `words`, all of which should have `word_size` letters
    ///
    /// The initial ranking covers the whole list.
    #[must_use]
    pub fn new(word_size: usize, words: Vec<Word>) -> Self {
        if word_size > MAX_ENCODABLE_WORD_SIZE {
            warn!(
                "word size {word_size} exceeds {MAX_ENCODABLE_WORD_SIZE}; positions from 10 up cannot be constrained"
            );
        }

        let mut solver = Self {
            word_size,
            candidates: words.clone(),
            all_words: words,
            constraints: Constraints::new(),
            score_table: ScoreTable::default(),
            ranking: Vec::new(),
        };
        solver.rescore();
        solver
    }

    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.word_size
    }

    /// Validate and normalize an absent-letter string
    ///
    /// # Errors
    /// Returns a `ConstraintError` if any character is not a letter.
    pub fn validate_absent(&self, raw: &str) -> Result<String, ConstraintError> {
        sanitize_absent(raw)
    }

    /// Validate and normalize a correct-position string for this word size
    ///
    /// # Errors
    /// Returns a `ConstraintError` if the pairs are malformed or out of range.
    pub fn validate_correct(&self, raw: &str) -> Result<String, ConstraintError> {
        sanitize_correct(raw, self.word_size)
    }

    /// Validate and normalize a wrong-position string for this word size
    ///
    /// # Errors
    /// Returns a `ConstraintError` if the pairs are malformed or out of range.
    pub fn validate_wrong(&self, raw: &str) -> Result<String, ConstraintError> {
        sanitize_wrong(raw, self.word_size)
    }

    pub fn add_absent(&mut self, letter: u8) {
        self.constraints.add_absent(letter);
    }

    pub fn add_absent_str(&mut self, letters: &str) {
        self.constraints.add_absent_str(letters);
    }

    pub fn add_absent_letters(&mut self, letters: impl IntoIterator<Item = u8>) {
        self.constraints.add_absent_letters(letters);
    }

    pub fn add_correct(&mut self, position: usize, letter: u8) {
        self.constraints.add_correct(position, letter);
    }

    pub fn add_correct_str(&mut self, encoded: &str) {
        self.constraints.add_correct_str(encoded);
    }

    pub fn add_correct_pairs(&mut self, pairs: impl IntoIterator<Item = PositionedLetter>) {
        self.constraints.add_correct_pairs(pairs);
    }

    pub fn add_wrong(&mut self, position: usize, letter: u8) {
        self.constraints.add_wrong(position, letter);
    }

    pub fn add_wrong_str(&mut self, encoded: &str) {
        self.constraints.add_wrong_str(encoded);
    }

    pub fn add_wrong_pairs(&mut self, pairs: impl IntoIterator<Item = PositionedLetter>) {
        self.constraints.add_wrong_pairs(pairs);
    }

    /// Narrow the candidates to those satisfying every constraint, then rescore
    ///
    /// The score table and ranking are rebuilt from the survivors.
    pub fn filter_candidates(&mut self) {
        let before = self.candidates.len();
        self.candidates = filter_words(&self.candidates, &self.constraints, self.word_size);
        debug!(
            "filtered candidates: {before} -> {}",
            self.candidates.len()
        );
        self.rescore();
    }

    /// Drop every constraint and restore the full word list
    pub fn reset(&mut self) {
        self.constraints.clear();
        self.candidates.clone_from(&self.all_words);
        self.rescore();
    }

    fn rescore(&mut self) {
        self.score_table = ScoreTable::build(self.word_size, &self.candidates);
        self.ranking = rank(&self.score_table, &self.candidates);
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// The full word list this solver was created with
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Words surviving the last filter pass
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn score_table(&self) -> &ScoreTable {
        &self.score_table
    }

    /// Candidates ordered best first
    #[must_use]
    pub fn ranking(&self) -> &[ScoredWord] {
        &self.ranking
    }

    /// Best reachable raw score over the current candidates
    #[must_use]
    pub fn max_score(&self) -> i64 {
        self.score_table.max_score()
    }
}
