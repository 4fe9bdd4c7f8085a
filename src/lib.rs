//! Wordle Ranker
//!
//! Narrows a word list to the candidates consistent with Wordle feedback, then ranks the
//! survivors by positional letter frequency with a penalty for repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::solver::Solver;
//! use wordle_ranker::wordlists::loader::words_from_lines;
//!
//! let words = words_from_lines(["crane", "slate", "trace"], 5);
//! let mut solver = Solver::new(5, words);
//!
//! let absent = solver.validate_absent("s").unwrap();
//! solver.add_absent_str(&absent);
//! solver.filter_candidates();
//!
//! for entry in solver.ranking() {
//!     println!("{} {}/{}", entry.word, entry.score, solver.max_score());
//! }
//! ```

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
