//! Adjacency arc consistency
//!
//! Every collapsed slot constrains its neighbors: if the pair table says
//! "L1 never precedes L2", a slot fixed to L1 removes L2 from the domain on
//! its right, and a slot fixed to L2 removes L1 from the domain on its left.
//! Runs after each feedback round and after every tentative assignment in
//! the search, since each new collapse creates new constraints.

use super::candidate::Candidate;
use crate::core::WORD_LEN;
use crate::lexicon::LetterPair;

/// Prune open domains adjacent to collapsed slots
///
/// Collapsed neighbors are left alone: their letter was fixed by feedback or
/// by an assignment, and a conflicting pair surfaces as a non-word terminal
/// instead. The pass is idempotent.
pub fn prune_adjacent(candidate: &mut Candidate, pairs: &[LetterPair]) {
    for i in 0..WORD_LEN {
        let Some(fixed) = candidate.slot(i).assigned() else {
            continue;
        };
        for pair in pairs {
            if fixed == pair.first && i + 1 < WORD_LEN {
                let right = candidate.slot_mut(i + 1);
                if !right.is_collapsed() {
                    right.remove(pair.second);
                }
            }
            if fixed == pair.second && i > 0 {
                let left = candidate.slot_mut(i - 1);
                if !left.is_collapsed() {
                    left.remove(pair.first);
                }
            }
        }
    }
}
