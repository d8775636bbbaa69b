//! Feedback application: seeding domains from one round of marks
//!
//! One round of feedback turns fresh frequency-ranked domains into
//! constrained ones. Yellows and exclusion sets carry over from earlier
//! rounds; only the domains are rebuilt.
//!
//! The three mark passes run in a fixed order - correct, elsewhere, absent -
//! which settles the repeated-letter cases: a green mark only consumes a
//! yellow carried over from a previous round, and an absent mark for a letter
//! that is yellow in the same guess stays local to its own slot (the absent
//! copy means "no more of these", not "none at all").

use super::candidate::Candidate;
use crate::core::{Feedback, Mark, WORD_LEN, Word};
use crate::lexicon::FrequencyTable;
use std::fmt;

/// Upper bound on distinct yellow letters; a five-letter word cannot owe
/// more than five unplaced letters
pub const MAX_YELLOWS: usize = WORD_LEN;

/// Error type for a feedback round that contradicts itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// More than five distinct yellow letters implied; the operator almost
    /// certainly mistyped the feedback
    TooManyYellows(usize),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyYellows(count) => write!(
                f,
                "Feedback implies {count} distinct yellow letters, but a word only has {MAX_YELLOWS} \
                 - did you enter the result correctly?"
            ),
        }
    }
}

impl std::error::Error for RoundError {}

impl Candidate {
    /// Apply one round of feedback for a guessed word
    ///
    /// Re-seeds the five domains from the frequency table, then runs the
    /// correct/elsewhere/absent passes, applies the accumulated exclusion
    /// sets, boosts the remaining yellows to their domains' front, and
    /// finishes with the single-candidate-position rule.
    ///
    /// # Errors
    /// Returns `RoundError::TooManyYellows` when the feedback would imply
    /// more than five distinct unplaced letters. State is left partially
    /// updated; callers that need atomicity apply the round to a clone.
    pub fn apply_round(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
        frequencies: &FrequencyTable,
    ) -> Result<(), RoundError> {
        self.set_slots(Self::seed_slots(frequencies));

        let letters = guess.chars();
        let marks = feedback.marks();

        // Correct: collapse the slot; a green consumes a yellow owed from a
        // previous round
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Correct {
                self.place(i, letters[i]);
            }
        }

        // Elsewhere: the letter is in the word but not here
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Elsewhere {
                let letter = letters[i];
                self.slot_mut(i).remove(letter);
                self.exclude(i, letter);
                self.push_yellow(letter);
                if self.yellows().len() > MAX_YELLOWS {
                    return Err(RoundError::TooManyYellows(self.yellows().len()));
                }
            }
        }

        // Absent: globally gone, unless the same letter earned a positive
        // mark (then only this copy is ruled out)
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Absent {
                let letter = letters[i];
                self.slot_mut(i).remove(letter);
                if self.yellows().contains(&letter) {
                    self.exclude(i, letter);
                } else if !self.exclusions(i).contains(letter) {
                    for j in 0..WORD_LEN {
                        if marks[j] == Mark::Correct && letters[j] == letter {
                            continue;
                        }
                        self.exclude(j, letter);
                    }
                }
            }
        }

        // Enforce the accumulated exclusion sets on every open domain
        for i in 0..WORD_LEN {
            let excluded = self.exclusions(i);
            let slot = self.slot_mut(i);
            if !slot.is_collapsed() {
                slot.remove_all(excluded);
            }
        }

        // Yellows are known to be in the word; try them first
        let yellows: Vec<u8> = self.yellows().to_vec();
        for yellow in yellows {
            for slot in self.slots_mut() {
                if !slot.is_collapsed() {
                    slot.boost(yellow);
                }
            }
        }

        self.place_forced_yellows();
        Ok(())
    }

    /// Single-candidate-position rule
    ///
    /// When exactly one slot is both open and not excluding a yellow letter,
    /// that slot must hold it: the other four positions have already ruled
    /// the letter out. Runs once per feedback round - exclusion sets only
    /// change between rounds.
    fn place_forced_yellows(&mut self) {
        let pending: Vec<u8> = self.yellows().to_vec();
        for yellow in pending {
            let mut eligible = (0..WORD_LEN).filter(|&i| {
                !self.slot(i).is_collapsed() && !self.exclusions(i).contains(yellow)
            });
            if let (Some(only), None) = (eligible.next(), eligible.next()) {
                self.place(only, yellow);
            }
        }
    }
}
