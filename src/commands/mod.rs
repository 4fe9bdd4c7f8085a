//! Command implementations

pub mod rank;

pub use rank::{DEFAULT_RESULT_LIMIT, RankConfig, RankResult, rank_words, run_rank};
