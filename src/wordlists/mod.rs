//! Word lists for candidate filtering
//!
//! Word lists are plain text files with one word per line.

pub mod loader;

/// Word list read when no path is given
pub const DEFAULT_WORDLIST: &str = "wordlist_all.txt";

/// Number of letters per word when no size is given
pub const DEFAULT_WORD_SIZE: usize = 5;
