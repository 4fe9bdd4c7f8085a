//! Word list loading utilities
//!
//! Each line is uppercased and stripped of non-letters; only lines that end up with
//! exactly the configured number of letters become words. Everything else is skipped.

use crate::core::Word;
use log::{debug, warn};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, treating an unreadable file as an empty list
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist_all.txt", 5);
/// println!("Loaded {} words", words.len());
/// ```
#[must_use]
pub fn load_from_file<P: AsRef<Path>>(path: P, word_size: usize) -> Vec<Word> {
    let path = path.as_ref();
    match try_load_from_file(path, word_size) {
        Ok(words) => words,
        Err(e) => {
            warn!("could not read word list {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Load words from a file
///
/// Lines are decoded one at a time, so bytes that are not valid UTF-8 only affect
/// their own line (and, being non-letters, are stripped like any other punctuation).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn try_load_from_file<P: AsRef<Path>>(path: P, word_size: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let lines: Vec<Cow<'_, str>> = bytes
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(String::from_utf8_lossy)
        .collect();

    let words = words_from_lines(lines.iter().map(|line| &**line), word_size);
    debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Sanitize raw lines into words of `word_size` letters
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["crane", "  Slate ", "toolong", "abc"], 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>, word_size: usize) -> Vec<Word> {
    let mut dropped = 0usize;
    let words: Vec<Word> = lines
        .into_iter()
        .filter_map(|line| {
            let word = Word::sanitize(line, word_size);
            if word.is_none() {
                dropped += 1;
            }
            word
        })
        .collect();

    if dropped > 0 {
        debug!("skipped {dropped} lines without exactly {word_size} letters");
    }
    words
}
