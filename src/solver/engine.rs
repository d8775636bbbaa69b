//! Session state across feedback rounds
//!
//! The solver keeps one [`Candidate`] alive for the whole game. Yellow
//! letters and per-slot exclusions accumulate round over round; domains are
//! re-seeded each round so late feedback can still reshape early slots.

use super::candidate::Candidate;
use super::init::RoundError;
use super::prune::prune_adjacent;
use super::search::Search;
use crate::core::{Feedback, Word};
use crate::lexicon::Lexicon;

/// A solver session over one lexicon
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    candidate: Candidate,
}

impl<'a> Solver<'a> {
    /// Start a fresh session
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            candidate: Candidate::new(lexicon.frequencies()),
        }
    }

    /// Fold one round of feedback into the session
    ///
    /// The update is atomic: on error the session is exactly as it was, so
    /// a mistyped feedback line can simply be re-entered.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), RoundError> {
        let mut scratch = self.candidate.clone();
        scratch.apply_round(guess, feedback, self.lexicon.frequencies())?;
        prune_adjacent(&mut scratch, self.lexicon.pairs());
        self.candidate = scratch;
        Ok(())
    }

    /// Search for a word satisfying every constraint gathered so far
    ///
    /// Returns `None` when no known word fits.
    #[must_use]
    pub fn suggest(&self) -> Option<Word> {
        Search::new(self.lexicon, self.candidate.clone()).run()
    }

    /// The constrained candidate, for display
    #[must_use]
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// The lexicon this session searches over
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Discard every constraint and start over
    pub fn reset(&mut self) {
        self.candidate = Candidate::new(self.lexicon.frequencies());
    }
}
