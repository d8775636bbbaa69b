//! Wordle Solver - CLI
//!
//! Constraint-propagation Wordle solver: per-slot letter domains pruned by
//! feedback, kept arc-consistent over impossible adjacent pairs, searched
//! with backtracking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_csp::{
    commands::{frequency_report, run_interactive, suggest_word},
    lexicon::{Lexicon, loader},
    output::{print_frequency_report, print_suggest_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_csp",
    about = "Wordle solver using constraint propagation over per-slot letter domains",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Path to a custom impossible-pair list (default: embedded pairs)
    #[arg(short = 'p', long, global = true)]
    pairs: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver loop (default)
    Interactive,

    /// Suggest the next word from completed rounds
    Suggest {
        /// Rounds as guess=pattern, e.g. crane=XYXXG
        rounds: Vec<String>,
    },

    /// Show the per-slot letter frequencies behind the domain ordering
    Frequency {
        /// Letters to show per slot
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Build the lexicon from the -w/-p flags, falling back to the embedded lists
fn load_lexicon(wordlist: Option<&str>, pairs: Option<&str>) -> Result<Lexicon> {
    let embedded = Lexicon::embedded();
    if wordlist.is_none() && pairs.is_none() {
        return Ok(embedded);
    }

    let words = match wordlist {
        Some(path) => {
            loader::load_words(path).with_context(|| format!("Failed to read word list {path}"))?
        }
        None => embedded.words().to_vec(),
    };
    let pairs = match pairs {
        Some(path) => {
            loader::load_pairs(path).with_context(|| format!("Failed to read pair list {path}"))?
        }
        None => embedded.pairs().to_vec(),
    };

    anyhow::ensure!(!words.is_empty(), "Word list contains no valid words");
    Ok(Lexicon::new(words, pairs))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(cli.wordlist.as_deref(), cli.pairs.as_deref())?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive(&lexicon).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest { rounds } => {
            let result = suggest_word(&lexicon, &rounds).map_err(|e| anyhow::anyhow!(e))?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Frequency { top } => {
            print_frequency_report(&frequency_report(&lexicon, top));
            Ok(())
        }
    }
}
