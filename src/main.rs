//! Wordle Ranker - CLI
//!
//! Narrows a word list with Wordle feedback and prints the best next guesses.

use anyhow::Result;
use clap::builder::TypedValueParser as _;
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;
use wordle_ranker::{
    commands::{DEFAULT_RESULT_LIMIT, RankConfig, run_rank},
    output::print_ranking,
    wordlists::{DEFAULT_WORD_SIZE, DEFAULT_WORDLIST},
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Filter a word list with Wordle feedback and rank the survivors by letter frequency",
    version,
    author,
    disable_help_flag = true
)]
struct Cli {
    /// Display help
    #[arg(short = 'h', short_alias = '?', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Number of results to display (0 shows all)
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULT_LIMIT)]
    limit: usize,

    /// File containing the list of words, one per line
    #[arg(short = 'f', long, default_value = DEFAULT_WORDLIST)]
    file: PathBuf,

    /// Number of letters in the words
    #[arg(
        short = 'z',
        long,
        default_value_t = DEFAULT_WORD_SIZE,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    size: usize,

    /// Letters absent from the solution, e.g. "sxz"
    #[arg(short = 'a', long, default_value = "")]
    absent: String,

    /// Position/letter pairs for correctly positioned letters, e.g. "0c4e"
    #[arg(short = 'c', long, default_value = "")]
    correct: String,

    /// Position/letter pairs for wrongly positioned letters, e.g. "1r"
    #[arg(short = 'w', long, default_value = "")]
    wrong: String,

    /// Prefix each result with a score bar
    #[arg(short = 'b', long)]
    bars: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = RankConfig {
        word_size: cli.size,
        wordlist: cli.file,
        absent: cli.absent,
        correct: cli.correct,
        wrong: cli.wrong,
    };

    let result = run_rank(&config)?;
    info!(
        "{} of {} words remain, max score {}",
        result.candidate_count(),
        result.total_words,
        result.max_score
    );

    print_ranking(&result, cli.limit, cli.bars);
    Ok(())
}
