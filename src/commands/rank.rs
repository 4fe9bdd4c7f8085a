//! Filter-and-rank command
//!
//! One stateless pass: validate the raw constraints, load the word list, filter, rank.

use crate::core::{ConstraintError, Word};
use crate::solver::{ScoredWord, Solver};
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{DEFAULT_WORD_SIZE, DEFAULT_WORDLIST};
use log::info;
use std::path::PathBuf;

/// Results shown when no limit is given; 0 shows every candidate
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Configuration for a ranking pass
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub word_size: usize,
    pub wordlist: PathBuf,
    pub absent: String,
    pub correct: String,
    pub wrong: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            absent: String::new(),
            correct: String::new(),
            wrong: String::new(),
        }
    }
}

/// Result of a ranking pass
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Surviving candidates, best first
    pub ranking: Vec<ScoredWord>,
    pub max_score: i64,
    pub total_words: usize,
}

impl RankResult {
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.ranking.len()
    }
}

/// Load the configured word list and rank it
///
/// An unreadable word list ranks as empty.
///
/// # Errors
///
/// Returns a `ConstraintError` naming the first malformed constraint string.
pub fn run_rank(config: &RankConfig) -> Result<RankResult, ConstraintError> {
    let words = load_from_file(&config.wordlist, config.word_size);
    info!(
        "loaded {} words of {} letters from {}",
        words.len(),
        config.word_size,
        config.wordlist.display()
    );
    rank_words(config, words)
}

/// Rank an already-loaded word list under the configured constraints
///
/// Validation happens before any constraint is applied, so a rejected string leaves
/// nothing half-applied.
///
/// # Errors
///
/// Returns a `ConstraintError` naming the first malformed constraint string.
///
/// # Examples
/// ```
/// use wordle_ranker::commands::{RankConfig, rank_words};
/// use wordle_ranker::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["crane", "slate", "trace"], 5);
/// let config = RankConfig {
///     absent: "s".to_string(),
///     ..RankConfig::default()
/// };
///
/// let result = rank_words(&config, words).unwrap();
/// assert_eq!(result.candidate_count(), 2);
/// ```
pub fn rank_words(config: &RankConfig, words: Vec<Word>) -> Result<RankResult, ConstraintError> {
    let mut solver = Solver::new(config.word_size, words);

    let absent = solver.validate_absent(&config.absent)?;
    let correct = solver.validate_correct(&config.correct)?;
    let wrong = solver.validate_wrong(&config.wrong)?;

    solver.add_absent_str(&absent);
    solver.add_correct_str(&correct);
    solver.add_wrong_str(&wrong);
    solver.filter_candidates();

    Ok(RankResult {
        ranking: solver.ranking().to_vec(),
        max_score: solver.max_score(),
        total_words: solver.all_words().len(),
    })
}
