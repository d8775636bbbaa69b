//! One-shot suggestion command
//!
//! Replays a series of `guess=pattern` rounds against a fresh session and
//! reports what the search proposes next.

use crate::core::{Feedback, Word};
use crate::lexicon::Lexicon;
use crate::solver::Solver;

/// One round echoed back for display
#[derive(Debug)]
pub struct AppliedRound {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of the suggest command
#[derive(Debug)]
pub struct SuggestResult {
    pub rounds: Vec<AppliedRound>,
    pub suggestion: Option<Word>,
    pub pending_yellows: Vec<u8>,
}

/// Apply each `guess=pattern` round and search for the next word
///
/// # Errors
///
/// Returns an error if:
/// - A round is not of the form `guess=pattern`
/// - The guess is not a valid five-letter word, or not in the dictionary
/// - The pattern is not five valid feedback symbols
/// - The feedback implies more yellow letters than a word can hold
pub fn suggest_word(lexicon: &Lexicon, rounds: &[String]) -> Result<SuggestResult, String> {
    let mut solver = Solver::new(lexicon);
    let mut applied = Vec::with_capacity(rounds.len());

    for spec in rounds {
        let (guess, pattern) = spec
            .split_once('=')
            .ok_or_else(|| format!("Round '{spec}' is not of the form guess=pattern"))?;

        let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
        if !lexicon.contains(&guess) {
            return Err(format!("Guess '{}' is not in the dictionary", guess.text()));
        }
        let feedback: Feedback = pattern
            .parse()
            .map_err(|e| format!("Invalid pattern '{pattern}': {e}"))?;

        solver
            .apply_feedback(&guess, &feedback)
            .map_err(|e| e.to_string())?;
        applied.push(AppliedRound { guess, feedback });
    }

    Ok(SuggestResult {
        rounds: applied,
        suggestion: solver.suggest(),
        pending_yellows: solver.candidate().yellows().to_vec(),
    })
}
