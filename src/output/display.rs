//! Display functions for command results

use super::formatters::{create_progress_bar, format_entry, visible_count};
use crate::commands::RankResult;
use colored::Colorize;

/// Print the ranked candidates, at most `limit` of them (0 prints all)
///
/// With `bars`, each line is prefixed by a bar showing the normalized score.
pub fn print_ranking(result: &RankResult, limit: usize, bars: bool) {
    if result.ranking.is_empty() {
        println!("{}", "No candidates remain.".red().bold());
        return;
    }

    let shown = visible_count(result.ranking.len(), limit);
    for entry in &result.ranking[..shown] {
        let line = format_entry(entry, result.max_score);
        if bars {
            let fraction = entry.fraction(result.max_score);
            println!("{} {line}", create_progress_bar(fraction, 1.0, 20).green());
        } else {
            println!("{line}");
        }
    }

    if shown < result.ranking.len() {
        println!(
            "{}",
            format!(
                "... {} more of {} candidates ({} words loaded)",
                result.ranking.len() - shown,
                result.ranking.len(),
                result.total_words
            )
            .bright_black()
        );
    }
}
