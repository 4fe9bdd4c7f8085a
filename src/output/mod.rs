//! Terminal output formatting
//!
//! Display utilities for ranked candidates.

pub mod display;
pub mod formatters;

pub use display::print_ranking;
