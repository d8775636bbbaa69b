//! Slot selection for the backtracking search
//!
//! Plain minimum-remaining-values when no yellow letters are pending. With
//! pending yellows the selector instead favors the slot whose domain holds
//! the fewest distinct yellows (but at least one), so unplaced yellows get
//! pinned down while they still have somewhere to go.

use super::candidate::Candidate;
use crate::core::WORD_LEN;

/// Pick the next open slot to branch on
///
/// Banned slots are never selected. Returns `None` when every slot is
/// collapsed or banned, which ends the current search attempt.
#[must_use]
pub fn select_slot(candidate: &Candidate, banned: &[usize]) -> Option<usize> {
    let open = |i: &usize| !candidate.slot(*i).is_collapsed() && !banned.contains(i);

    if !candidate.yellows().is_empty() {
        // Fewest distinct yellows still possible in the slot, ties by
        // lowest index
        let best = (0..WORD_LEN)
            .filter(open)
            .filter_map(|i| {
                let count = candidate
                    .yellows()
                    .iter()
                    .filter(|&&y| candidate.slot(i).contains(y))
                    .count();
                (count > 0).then_some((count, i))
            })
            .min();
        if let Some((_, slot)) = best {
            return Some(slot);
        }
        // No open slot can host a yellow; fall through to plain MRV
    }

    (0..WORD_LEN)
        .filter(open)
        .min_by_key(|&i| (candidate.slot(i).len(), i))
}
