//! Core domain types
//!
//! This module contains the words, constraints and constraint validation.
//! All types here are pure and testable without touching the filesystem.

mod constraint;
mod validate;
mod word;

pub use constraint::{Constraints, PositionedLetter, decode_pairs};
pub use validate::{
    ConstraintError, ConstraintKind, PairError, sanitize_absent, sanitize_correct,
    sanitize_positioned, sanitize_wrong,
};
pub use word::{Word, WordError};
