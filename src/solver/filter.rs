//! Candidate filtering against accumulated constraints
//!
//! A word survives only if it passes the absent, correct-position and wrong-position
//! checks together. Positions outside the word are a failed check, not an error.

use crate::core::{Constraints, Word};
use rayon::prelude::*;

/// No letter within the first `word_size` positions may be an absent letter
#[must_use]
pub fn satisfies_absent(word: &Word, constraints: &Constraints, word_size: usize) -> bool {
    word.letters()
        .iter()
        .take(word_size)
        .all(|&letter| !constraints.is_absent(letter))
}

/// Every correct-position letter must sit exactly at its position
#[must_use]
pub fn satisfies_correct(word: &Word, constraints: &Constraints, word_size: usize) -> bool {
    constraints.correct().iter().all(|pair| {
        pair.position < word_size && word.letter_at(pair.position) == Some(pair.letter)
    })
}

/// Every wrong-position letter must be absent from its position but present elsewhere
#[must_use]
pub fn satisfies_wrong(word: &Word, constraints: &Constraints, word_size: usize) -> bool {
    constraints.wrong().iter().all(|pair| {
        if pair.position >= word_size {
            return false;
        }
        match word.letter_at(pair.position) {
            Some(letter) => letter != pair.letter && word.has_letter(pair.letter),
            None => false,
        }
    })
}

/// Check a word against all three constraint kinds
#[inline]
#[must_use]
pub fn satisfies_all(word: &Word, constraints: &Constraints, word_size: usize) -> bool {
    satisfies_absent(word, constraints, word_size)
        && satisfies_correct(word, constraints, word_size)
        && satisfies_wrong(word, constraints, word_size)
}

/// Keep the words consistent with `constraints`, preserving their order
///
/// # Examples
/// ```
/// use wordle_ranker::core::{Constraints, Word};
/// use wordle_ranker::solver::filter_words;
///
/// let words: Vec<Word> = ["crane", "slate", "trace"]
///     .iter()
///     .map(|w| Word::new(w, 5).unwrap())
///     .collect();
///
/// let mut constraints = Constraints::new();
/// constraints.add_absent(b'S');
///
/// let survivors = filter_words(&words, &constraints, 5);
/// assert_eq!(survivors.len(), 2);
/// ```
#[must_use]
pub fn filter_words(words: &[Word], constraints: &Constraints, word_size: usize) -> Vec<Word> {
    if constraints.is_empty() {
        return words.to_vec();
    }

    words
        .par_iter()
        .filter(|word| satisfies_all(word, constraints, word_size))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w, 5).unwrap()).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let list = words(&["crane", "slate", "trace"]);
        let survivors = filter_words(&list, &Constraints::new(), 5);
        assert_eq!(survivors, list);
    }

    #[test]
    fn absent_letter_excludes_words_containing_it() {
        let list = words(&["crane", "slate", "trace"]);
        let mut constraints = Constraints::new();
        constraints.add_absent(b'S');

        let survivors = filter_words(&list, &constraints, 5);
        assert_eq!(texts(&survivors), vec!["CRANE", "TRACE"]);
    }

    #[test]
    fn absent_check_stops_at_word_size() {
        let word = Word::new("crane", 5).unwrap();
        let mut constraints = Constraints::new();
        constraints.add_absent(b'E');

        assert!(!satisfies_absent(&word, &constraints, 5));
        assert!(satisfies_absent(&word, &constraints, 4));
    }

    #[test]
    fn correct_position_keeps_exact_matches_only() {
        let list = words(&["crane", "slate", "trace"]);
        let mut constraints = Constraints::new();
        constraints.add_correct(0, b'C');

        let survivors = filter_words(&list, &constraints, 5);
        assert_eq!(texts(&survivors), vec!["CRANE"]);
    }

    #[test]
    fn correct_position_out_of_range_fails() {
        let word = Word::new("crane", 5).unwrap();
        let mut constraints = Constraints::new();
        constraints.add_correct(5, b'E');
        assert!(!satisfies_correct(&word, &constraints, 5));

        let mut constraints = Constraints::new();
        constraints.add_correct(4, b'E');
        assert!(!satisfies_correct(&word, &constraints, 4));
        assert!(satisfies_correct(&word, &constraints, 5));
    }

    #[test]
    fn wrong_position_requires_letter_elsewhere() {
        let list = words(&["crane", "slate", "trace", "light"]);
        let mut constraints = Constraints::new();
        constraints.add_wrong(0, b'T');

        // SLATE has T at 3, LIGHT at 4; TRACE is excluded for T at 0, CRANE has no T
        let survivors = filter_words(&list, &constraints, 5);
        assert_eq!(texts(&survivors), vec!["SLATE", "LIGHT"]);
    }

    #[test]
    fn wrong_position_out_of_range_fails() {
        let word = Word::new("crane", 5).unwrap();
        let mut constraints = Constraints::new();
        constraints.add_wrong(7, b'C');
        assert!(!satisfies_wrong(&word, &constraints, 5));
    }

    #[test]
    fn constraints_combine_with_and() {
        let list = words(&["crane", "slate", "trace", "crate", "grace"]);
        let mut constraints = Constraints::new();
        constraints.add_absent(b'N');
        constraints.add_correct(4, b'E');
        constraints.add_wrong(0, b'T');

        let survivors = filter_words(&list, &constraints, 5);
        assert_eq!(texts(&survivors), vec!["SLATE", "CRATE"]);
    }

    #[test]
    fn filtering_is_a_subset() {
        let list = words(&["crane", "slate", "trace", "crate", "grace", "eerie"]);
        let mut constraints = Constraints::new();
        constraints.add_wrong(1, b'E');

        let survivors = filter_words(&list, &constraints, 5);
        assert!(survivors.iter().all(|w| list.contains(w)));
        assert!(survivors.len() <= list.len());
    }
}
