//! Candidate word representation
//!
//! A Word stores an uppercase A-Z word of the configured word size.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase candidate word of a fixed, configured length
///
/// Immutable once created. The letters are kept as ASCII bytes so position lookups are cheap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, requiring exactly `word_size` ASCII letters
    ///
    /// Letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Any character is not an ASCII letter
    /// - Length is not exactly `word_size`
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, word_size: usize) -> Result<Self, WordError> {
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() != word_size {
            return Err(WordError::InvalidLength {
                expected: word_size,
                actual: text.len(),
            });
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Build a Word from a raw word-list line
    ///
    /// Uppercases the line and strips every non-letter character, then accepts the
    /// result only if its length equals `word_size`.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::Word;
    ///
    /// assert_eq!(Word::sanitize(" Crane\r", 5).unwrap().text(), "CRANE");
    /// assert_eq!(Word::sanitize("o'clock", 6).unwrap().text(), "OCLOCK");
    /// assert!(Word::sanitize("cranes", 5).is_none());
    /// ```
    #[must_use]
    pub fn sanitize(line: &str, word_size: usize) -> Option<Self> {
        let text: String = line
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        (text.len() == word_size).then_some(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at `position`, or `None` past the end of the word
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters().get(position).copied()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Number of repeated letters: length minus the number of distinct letters
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.len() - self.letter_counts().len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE", 5).unwrap();
        assert_eq!(word2.text(), "CRANE");
    }

    #[test]
    fn word_creation_respects_word_size() {
        assert!(Word::new("crane", 6).is_err());
        assert_eq!(Word::new("planet", 6).unwrap().text(), "PLANET");
        assert!(matches!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran ", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!", 5), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn sanitize_strips_non_letters() {
        assert_eq!(Word::sanitize("cr-a ne", 5).unwrap().text(), "CRANE");
        assert_eq!(Word::sanitize("slate\r\n", 5).unwrap().text(), "SLATE");
        assert_eq!(Word::sanitize("tr4ace", 5).unwrap().text(), "TRACE");
    }

    #[test]
    fn sanitize_drops_wrong_length() {
        assert!(Word::sanitize("", 5).is_none());
        assert!(Word::sanitize("abcd", 5).is_none());
        assert!(Word::sanitize("abcdef", 5).is_none());
        assert!(Word::sanitize("12345", 5).is_none());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.letter_at(0), Some(b'C'));
        assert_eq!(word.letter_at(4), Some(b'E'));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane", 5).unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'A'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'c')); // Letters are stored uppercase
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed", 5).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_duplicate_count() {
        assert_eq!(Word::new("crane", 5).unwrap().duplicate_count(), 0);
        assert_eq!(Word::new("speed", 5).unwrap().duplicate_count(), 1);
        assert_eq!(Word::new("eerie", 5).unwrap().duplicate_count(), 2);
        assert_eq!(Word::new("eeeer", 5).unwrap().duplicate_count(), 3);
        assert_eq!(Word::new("aaaaa", 5).unwrap().duplicate_count(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_ordering_is_lexical() {
        let a = Word::new("crane", 5).unwrap();
        let b = Word::new("slate", 5).unwrap();
        assert!(a < b);
    }
}
