//! Candidate filtering and ranking
//!
//! `filter` narrows a word list with the accumulated constraints, `scoring` ranks the
//! survivors, and `Solver` ties the two together.

mod engine;
pub mod filter;
pub mod scoring;

pub use engine::Solver;
pub use filter::filter_words;
pub use scoring::{DUPLICATE_LETTER_PENALTY, ScoreTable, ScoredWord, apply_duplicate_penalty, rank};
