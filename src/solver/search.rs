//! Depth-first backtracking over slot domains
//!
//! Each attempt starts from a snapshot of the constrained candidate, picks
//! slots via [`select_slot`], and tries the letters of the chosen slot in
//! domain order. A fully collapsed candidate whose letters spell a known
//! word with every yellow placed is a solution. A collapsed candidate that
//! is neither a word nor places all yellows signals that the very first
//! branching choice steered the yellows wrong; the search restarts from the
//! snapshot with that first slot banned.

use super::candidate::Candidate;
use super::prune::prune_adjacent;
use super::select::select_slot;
use crate::core::{WORD_LEN, Word};
use crate::lexicon::Lexicon;

/// Result of exploring one subtree
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    /// A known word with every yellow placed
    Solved(Word),
    /// A collapsed non-word with a yellow left unplaced; restart signal
    DeadEnd,
    /// The subtree holds no solution
    Exhausted,
}

/// One search over a constrained candidate
pub struct Search<'a> {
    lexicon: &'a Lexicon,
    snapshot: Candidate,
    banned_first: Vec<usize>,
    explored: usize,
    restarts: usize,
}

impl<'a> Search<'a> {
    /// Start a search from the given constrained candidate
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, snapshot: Candidate) -> Self {
        Self {
            lexicon,
            snapshot,
            banned_first: Vec::new(),
            explored: 0,
            restarts: 0,
        }
    }

    /// Run to completion, restarting on dead ends
    ///
    /// Returns `None` once every restart is spent or the constraints admit
    /// no known word.
    pub fn run(&mut self) -> Option<Word> {
        if let Some(outcome) = self.terminal(&self.snapshot) {
            return match outcome {
                Outcome::Solved(word) => Some(word),
                Outcome::DeadEnd | Outcome::Exhausted => None,
            };
        }
        loop {
            let slot = select_slot(&self.snapshot, &self.banned_first)?;
            match self.branch(self.snapshot.clone(), slot) {
                Outcome::Solved(word) => return Some(word),
                Outcome::Exhausted => return None,
                Outcome::DeadEnd => {
                    // The first choice pinned a yellow out of reach; try a
                    // different opening slot.
                    self.banned_first.push(slot);
                    self.restarts += 1;
                    if self.banned_first.len() >= WORD_LEN {
                        return None;
                    }
                }
            }
        }
    }

    /// Assignments tried so far
    #[must_use]
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Restarts taken so far
    #[must_use]
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    fn branch(&mut self, candidate: Candidate, slot: usize) -> Outcome {
        let letters: Vec<u8> = candidate.slot(slot).letters().collect();
        for letter in letters {
            self.explored += 1;
            let mut next = candidate.clone();
            next.assign(slot, letter);
            prune_adjacent(&mut next, self.lexicon.pairs());
            match self.descend(next) {
                Outcome::Exhausted => {}
                done => return done,
            }
        }
        Outcome::Exhausted
    }

    fn descend(&mut self, candidate: Candidate) -> Outcome {
        if let Some(outcome) = self.terminal(&candidate) {
            return outcome;
        }
        match select_slot(&candidate, &[]) {
            Some(slot) => self.branch(candidate, slot),
            None => Outcome::Exhausted,
        }
    }

    fn terminal(&self, candidate: &Candidate) -> Option<Outcome> {
        if (0..WORD_LEN).any(|i| candidate.slot(i).is_empty()) {
            return Some(Outcome::Exhausted);
        }
        let mut letters = [0_u8; WORD_LEN];
        for i in 0..WORD_LEN {
            letters[i] = candidate.slot(i).assigned()?;
        }
        let known = self.lexicon.contains_letters(&letters);
        let placed = candidate.all_yellows_placed();
        Some(match (known, placed) {
            (true, true) => Outcome::Solved(Word::from_letters(letters)),
            (false, false) => Outcome::DeadEnd,
            _ => Outcome::Exhausted,
        })
    }
}
