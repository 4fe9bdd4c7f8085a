//! Validation and normalization of raw constraint strings
//!
//! Absent letters are a plain run of letters (`"sxz"`). Positioned letters alternate a
//! single position digit with a letter (`"0c4e"`), so only positions 0-9 can be expressed.

use std::fmt;

/// Which kind of constraint a raw string describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Absent,
    CorrectPosition,
    WrongPosition,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent letters"),
            Self::CorrectPosition => write!(f, "correctly positioned letters"),
            Self::WrongPosition => write!(f, "wrongly positioned letters"),
        }
    }
}

/// Why a raw constraint string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    OddLength(usize),
    InvalidPosition(char),
    PositionOutOfRange { position: usize, word_size: usize },
    InvalidLetter(char),
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength(len) => {
                write!(f, "expected position/letter pairs, got odd length {len}")
            }
            Self::InvalidPosition(c) => write!(f, "'{c}' is not a position digit"),
            Self::PositionOutOfRange {
                position,
                word_size,
            } => write!(
                f,
                "position {position} is outside a {word_size}-letter word"
            ),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for PairError {}

/// A rejected constraint string, tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintError {
    pub kind: ConstraintKind,
    pub reason: PairError,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.kind, self.reason)
    }
}

impl std::error::Error for ConstraintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

/// Validate an absent-letter string, returning it uppercased
///
/// # Errors
/// Returns a `ConstraintError` of kind `Absent` if any character is not an ASCII letter.
///
/// # Examples
/// ```
/// use wordle_ranker::core::sanitize_absent;
///
/// assert_eq!(sanitize_absent("sXz").unwrap(), "SXZ");
/// assert!(sanitize_absent("s1").is_err());
/// ```
pub fn sanitize_absent(raw: &str) -> Result<String, ConstraintError> {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_uppercase())
            } else {
                Err(ConstraintError {
                    kind: ConstraintKind::Absent,
                    reason: PairError::InvalidLetter(c),
                })
            }
        })
        .collect()
}

/// Validate a correct-position string against `word_size`
///
/// # Errors
/// Returns a `ConstraintError` of kind `CorrectPosition` when the string is malformed.
pub fn sanitize_correct(raw: &str, word_size: usize) -> Result<String, ConstraintError> {
    sanitize_positioned(raw, word_size).map_err(|reason| ConstraintError {
        kind: ConstraintKind::CorrectPosition,
        reason,
    })
}

/// Validate a wrong-position string against `word_size`
///
/// # Errors
/// Returns a `ConstraintError` of kind `WrongPosition` when the string is malformed.
pub fn sanitize_wrong(raw: &str, word_size: usize) -> Result<String, ConstraintError> {
    sanitize_positioned(raw, word_size).map_err(|reason| ConstraintError {
        kind: ConstraintKind::WrongPosition,
        reason,
    })
}

/// Validate an alternating `<digit><letter>` string, uppercasing the letters
///
/// Each digit must be `0`-`9` and strictly less than `word_size`.
///
/// # Errors
/// Returns the first `PairError` found; nothing is returned on failure.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{PairError, sanitize_positioned};
///
/// assert_eq!(sanitize_positioned("0c4e", 5).unwrap(), "0C4E");
/// assert_eq!(sanitize_positioned("0c4", 5), Err(PairError::OddLength(3)));
/// assert!(sanitize_positioned("5a", 5).is_err());
/// ```
pub fn sanitize_positioned(raw: &str, word_size: usize) -> Result<String, PairError> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(PairError::OddLength(chars.len()));
    }

    let mut sanitized = String::with_capacity(chars.len());
    for pair in chars.chunks_exact(2) {
        let (digit, letter) = (pair[0], pair[1]);

        let position = digit
            .to_digit(10)
            .ok_or(PairError::InvalidPosition(digit))? as usize;
        if position >= word_size {
            return Err(PairError::PositionOutOfRange {
                position,
                word_size,
            });
        }
        if !letter.is_ascii_alphabetic() {
            return Err(PairError::InvalidLetter(letter));
        }

        sanitized.push(digit);
        sanitized.push(letter.to_ascii_uppercase());
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_uppercases_letters() {
        assert_eq!(sanitize_absent("abcXYZ").unwrap(), "ABCXYZ");
        assert_eq!(sanitize_absent("").unwrap(), "");
    }

    #[test]
    fn absent_rejects_any_non_letter() {
        for raw in ["a1", " ", "ab-c", "é", "0"] {
            let err = sanitize_absent(raw).unwrap_err();
            assert_eq!(err.kind, ConstraintKind::Absent, "input {raw:?}");
        }
    }

    #[test]
    fn positioned_rejects_odd_lengths() {
        for raw in ["0", "0ab", "0a1b2", "01234"] {
            assert!(
                matches!(sanitize_positioned(raw, 5), Err(PairError::OddLength(_))),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn positioned_accepts_every_in_range_digit() {
        for position in 0..5 {
            for letter in ['a', 'm', 'Z'] {
                let raw = format!("{position}{letter}");
                let expected = format!("{position}{}", letter.to_ascii_uppercase());
                assert_eq!(sanitize_positioned(&raw, 5).unwrap(), expected);
            }
        }
    }

    #[test]
    fn positioned_rejects_out_of_range_position() {
        assert_eq!(
            sanitize_positioned("0a5b", 5),
            Err(PairError::PositionOutOfRange {
                position: 5,
                word_size: 5
            })
        );
        assert!(sanitize_positioned("9a", 10).is_ok());
        assert!(sanitize_positioned("0a", 0).is_err());
    }

    #[test]
    fn positioned_rejects_bad_digit_or_letter() {
        assert_eq!(
            sanitize_positioned("xa", 5),
            Err(PairError::InvalidPosition('x'))
        );
        assert_eq!(sanitize_positioned("a0", 5), Err(PairError::InvalidPosition('a')));
        assert_eq!(sanitize_positioned("01", 5), Err(PairError::InvalidLetter('1')));
    }

    #[test]
    fn errors_name_their_kind() {
        let correct = sanitize_correct("7a", 5).unwrap_err();
        assert_eq!(correct.kind, ConstraintKind::CorrectPosition);
        assert!(correct.to_string().starts_with("Invalid correctly positioned letters"));

        let wrong = sanitize_wrong("0", 5).unwrap_err();
        assert_eq!(wrong.kind, ConstraintKind::WrongPosition);
        assert!(wrong.to_string().starts_with("Invalid wrongly positioned letters"));

        let absent = sanitize_absent("?").unwrap_err();
        assert!(absent.to_string().starts_with("Invalid absent letters"));
    }
}
