//! Accumulated feedback constraints
//!
//! Three de-duplicated sets describe what is known about the solution:
//! - absent letters (not anywhere in the word)
//! - correct-position letters (exactly at a position)
//! - wrong-position letters (in the word, but not at a position)

use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;

/// A letter tied to a zero-based position in the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionedLetter {
    pub position: usize,
    pub letter: u8,
}

impl PositionedLetter {
    #[inline]
    #[must_use]
    pub const fn new(position: usize, letter: u8) -> Self {
        Self { position, letter }
    }
}

impl fmt::Display for PositionedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position, char::from(self.letter))
    }
}

/// Decode an alternating `<digit><letter>` string into positioned letters
///
/// The string is not re-validated. An odd-length string yields nothing.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{PositionedLetter, decode_pairs};
///
/// let pairs = decode_pairs("0C4E");
/// assert_eq!(pairs, vec![PositionedLetter::new(0, b'C'), PositionedLetter::new(4, b'E')]);
/// assert!(decode_pairs("0C4").is_empty());
/// ```
#[must_use]
pub fn decode_pairs(encoded: &str) -> Vec<PositionedLetter> {
    let bytes = encoded.as_bytes();
    if bytes.len() % 2 != 0 {
        debug!("ignoring odd-length positioned letters {encoded:?}");
        return Vec::new();
    }

    bytes
        .chunks_exact(2)
        .map(|pair| PositionedLetter::new(usize::from(pair[0].wrapping_sub(b'0')), pair[1]))
        .collect()
}

/// The constraint store
///
/// All adders are idempotent: inserting something already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    absent: FxHashSet<u8>,
    correct: FxHashSet<PositionedLetter>,
    wrong: FxHashSet<PositionedLetter>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter known not to appear in the solution
    ///
    /// Returns `true` if the letter was newly inserted.
    pub fn add_absent(&mut self, letter: u8) -> bool {
        self.absent.insert(letter)
    }

    /// Add every letter of an already-sanitized absent-letter string
    pub fn add_absent_str(&mut self, letters: &str) {
        self.add_absent_letters(letters.bytes());
    }

    pub fn add_absent_letters(&mut self, letters: impl IntoIterator<Item = u8>) {
        for letter in letters {
            self.add_absent(letter);
        }
    }

    /// Add a letter known to sit exactly at `position`
    ///
    /// Returns `true` if the pair was newly inserted.
    pub fn add_correct(&mut self, position: usize, letter: u8) -> bool {
        self.correct.insert(PositionedLetter::new(position, letter))
    }

    /// Add every pair of an already-sanitized `<digit><letter>` string
    pub fn add_correct_str(&mut self, encoded: &str) {
        self.add_correct_pairs(decode_pairs(encoded));
    }

    pub fn add_correct_pairs(&mut self, pairs: impl IntoIterator<Item = PositionedLetter>) {
        for pair in pairs {
            self.add_correct(pair.position, pair.letter);
        }
    }

    /// Add a letter known to be in the solution but not at `position`
    ///
    /// Returns `true` if the pair was newly inserted.
    pub fn add_wrong(&mut self, position: usize, letter: u8) -> bool {
        self.wrong.insert(PositionedLetter::new(position, letter))
    }

    /// Add every pair of an already-sanitized `<digit><letter>` string
    pub fn add_wrong_str(&mut self, encoded: &str) {
        self.add_wrong_pairs(decode_pairs(encoded));
    }

    pub fn add_wrong_pairs(&mut self, pairs: impl IntoIterator<Item = PositionedLetter>) {
        for pair in pairs {
            self.add_wrong(pair.position, pair.letter);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<u8> {
        &self.absent
    }

    #[must_use]
    pub const fn correct(&self) -> &FxHashSet<PositionedLetter> {
        &self.correct
    }

    #[must_use]
    pub const fn wrong(&self) -> &FxHashSet<PositionedLetter> {
        &self.wrong
    }

    /// True when no constraint of any kind has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.correct.is_empty() && self.wrong.is_empty()
    }

    pub fn clear(&mut self) {
        self.absent.clear();
        self.correct.clear();
        self.wrong.clear();
    }
}
