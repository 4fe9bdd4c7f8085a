//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Format one ranked word as `WORD, fraction [score/max]`
///
/// # Examples
/// ```
/// use wordle_ranker::core::Word;
/// use wordle_ranker::output::formatters::format_entry;
/// use wordle_ranker::solver::ScoredWord;
///
/// let entry = ScoredWord { score: 8, word: Word::new("crane", 5).unwrap() };
/// assert_eq!(format_entry(&entry, 10), "CRANE, 0.800000 [8/10]");
/// ```
#[must_use]
pub fn format_entry(entry: &ScoredWord, max_score: i64) -> String {
    format!(
        "{}, {:.6} [{}/{}]",
        entry.word,
        entry.fraction(max_score),
        entry.score,
        max_score
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entries to show for a result limit, where 0 means all of them
#[must_use]
pub fn visible_count(available: usize, limit: usize) -> usize {
    if limit == 0 {
        available
    } else {
        available.min(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn entry_with_zero_max() {
        let entry = ScoredWord {
            score: 0,
            word: Word::new("crane", 5).unwrap(),
        };
        assert_eq!(format_entry(&entry, 0), "CRANE, 0.000000 [0/0]");
    }

    #[test]
    fn entry_uses_six_decimals() {
        let entry = ScoredWord {
            score: 1,
            word: Word::new("slate", 5).unwrap(),
        };
        assert_eq!(format_entry(&entry, 3), "SLATE, 0.333333 [1/3]");
    }

    #[test]
    fn entry_with_negative_score() {
        let entry = ScoredWord {
            score: -2,
            word: Word::new("aaaaaa", 6).unwrap(),
        };
        assert_eq!(format_entry(&entry, 4), "AAAAAA, -0.500000 [-2/4]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_or_negative() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
        assert_eq!(create_progress_bar(-3.0, 10.0, 4), "░░░░");
    }

    #[test]
    fn limit_zero_shows_everything() {
        assert_eq!(visible_count(42, 0), 42);
        assert_eq!(visible_count(42, 20), 20);
        assert_eq!(visible_count(3, 20), 3);
    }
}
