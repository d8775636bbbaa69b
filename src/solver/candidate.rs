//! Candidate word state for the constraint search
//!
//! A `Candidate` is one partially-assigned word: five slot domains, the
//! worklist of yellow letters still waiting for a position, and one exclusion
//! set per slot. It is cloned at every branch point of the search, so clones
//! must be fully independent.
//!
//! Domains are ordered lists of `(letter, rank)` entries. The rank is the
//! letter's position in the per-slot frequency table; a boosted entry (a
//! yellow letter known to be in the word) is moved to the front of the domain
//! so it is tried first. Each letter appears at most once per domain - the
//! boost flag replaces the duplicate-character priority trick.

use crate::core::{WORD_LEN, Word};
use crate::lexicon::FrequencyTable;

/// A set of lowercase letters, one bit per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Whether the set holds no letters
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// One entry of a slot domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainEntry {
    /// Lowercase letter
    pub letter: u8,
    /// Position in the slot's frequency ranking (0 = most frequent)
    pub rank: u8,
    /// Yellow-priority marker; boosted entries sit at the domain front
    pub boosted: bool,
}

/// An ordered domain of candidate letters for one slot
///
/// Invariant: boosted entries form a prefix (most recently boosted first);
/// the remaining entries are sorted by ascending rank. A domain with exactly
/// one entry is collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    entries: Vec<DomainEntry>,
}

impl Domain {
    /// Build a domain from letters in ranking order (rank = index)
    #[must_use]
    pub fn from_ranked(letters: &[u8]) -> Self {
        let entries = letters
            .iter()
            .enumerate()
            .map(|(rank, &letter)| DomainEntry {
                letter,
                rank: rank as u8,
                boosted: false,
            })
            .collect();
        Self { entries }
    }

    /// Build a domain already collapsed to a single letter
    #[must_use]
    pub fn collapsed(letter: u8) -> Self {
        Self {
            entries: vec![DomainEntry {
                letter,
                rank: 0,
                boosted: false,
            }],
        }
    }

    /// Number of letters still possible for this slot
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the domain has been emptied by pruning
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A slot is collapsed once exactly one letter remains
    #[inline]
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.entries.len() == 1
    }

    /// The assigned letter of a collapsed domain, if any
    #[inline]
    #[must_use]
    pub fn assigned(&self) -> Option<u8> {
        match self.entries.as_slice() {
            [single] => Some(single.letter),
            _ => None,
        }
    }

    /// Check whether a letter is still in the domain
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.entries.iter().any(|e| e.letter == letter)
    }

    /// Remove a letter from the domain, if present
    pub fn remove(&mut self, letter: u8) {
        self.entries.retain(|e| e.letter != letter);
    }

    /// Remove every letter of the given set from the domain
    pub fn remove_all(&mut self, set: LetterSet) {
        self.entries.retain(|e| !set.contains(e.letter));
    }

    /// Collapse the domain to a single letter
    pub fn collapse_to(&mut self, letter: u8) {
        self.entries.retain(|e| e.letter == letter);
        self.entries.truncate(1);
        if let Some(entry) = self.entries.first_mut() {
            entry.boosted = false;
        }
    }

    /// Move a letter to the domain front and mark it boosted
    ///
    /// No-op when the letter is absent or already boosted.
    pub fn boost(&mut self, letter: u8) {
        let Some(pos) = self.entries.iter().position(|e| e.letter == letter) else {
            return;
        };
        if self.entries[pos].boosted {
            return;
        }
        let mut entry = self.entries.remove(pos);
        entry.boosted = true;
        self.entries.insert(0, entry);
    }

    /// Clear a letter's boost and return it to its frequency position
    ///
    /// This is the "remove one occurrence" deprioritization: the letter stays
    /// in the domain, it just loses its front-of-queue priority. No-op when
    /// the letter is absent or not boosted.
    pub fn unboost(&mut self, letter: u8) {
        let Some(pos) = self.entries.iter().position(|e| e.letter == letter) else {
            return;
        };
        if !self.entries[pos].boosted {
            return;
        }
        let mut entry = self.entries.remove(pos);
        entry.boosted = false;

        // Reinsert after the boosted prefix, keeping unboosted ranks ascending
        let insert_at = self
            .entries
            .iter()
            .position(|e| !e.boosted && e.rank > entry.rank)
            .unwrap_or(self.entries.len());
        self.entries.insert(insert_at, entry);
    }

    /// Letters in try order: boosted first, then ascending frequency rank
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|e| e.letter)
    }

    /// The underlying entries, in try order
    #[must_use]
    pub fn entries(&self) -> &[DomainEntry] {
        &self.entries
    }
}

/// A partially-assigned candidate word
///
/// Yellows and exclusion sets persist across feedback rounds; domains are
/// re-seeded from the frequency table at the start of each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    slots: [Domain; WORD_LEN],
    yellows: Vec<u8>,
    exclusions: [LetterSet; WORD_LEN],
}

impl Candidate {
    /// A fresh candidate with frequency-seeded domains and no constraints
    #[must_use]
    pub fn new(frequencies: &FrequencyTable) -> Self {
        Self {
            slots: Self::seed_slots(frequencies),
            yellows: Vec::new(),
            exclusions: [LetterSet::EMPTY; WORD_LEN],
        }
    }

    pub(crate) fn seed_slots(frequencies: &FrequencyTable) -> [Domain; WORD_LEN] {
        std::array::from_fn(|slot| Domain::from_ranked(frequencies.ranking(slot)))
    }

    /// The domain of one slot
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> &Domain {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Domain {
        &mut self.slots[index]
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Domain; WORD_LEN] {
        &mut self.slots
    }

    pub(crate) fn set_slots(&mut self, slots: [Domain; WORD_LEN]) {
        self.slots = slots;
    }

    /// The yellow-letter worklist, in discovery order
    #[must_use]
    pub fn yellows(&self) -> &[u8] {
        &self.yellows
    }

    pub(crate) fn push_yellow(&mut self, letter: u8) -> bool {
        if self.yellows.contains(&letter) {
            return false;
        }
        self.yellows.push(letter);
        true
    }

    pub(crate) fn drop_yellow(&mut self, letter: u8) {
        if let Some(pos) = self.yellows.iter().position(|&y| y == letter) {
            self.yellows.remove(pos);
        }
    }

    /// The exclusion set of one slot
    #[inline]
    #[must_use]
    pub fn exclusions(&self, index: usize) -> LetterSet {
        self.exclusions[index]
    }

    pub(crate) fn exclude(&mut self, index: usize, letter: u8) {
        self.exclusions[index].insert(letter);
    }

    /// Whether every slot has collapsed to a single letter
    #[must_use]
    pub fn is_fully_collapsed(&self) -> bool {
        self.slots.iter().all(Domain::is_collapsed)
    }

    /// Join the assigned letters into a word, if fully collapsed
    #[must_use]
    pub fn assigned_word(&self) -> Option<Word> {
        let mut letters = [0_u8; WORD_LEN];
        for (i, slot) in self.slots.iter().enumerate() {
            letters[i] = slot.assigned()?;
        }
        Some(Word::from_letters(letters))
    }

    /// Whether every yellow letter appears among the assigned letters
    ///
    /// Only meaningful on a fully collapsed candidate; open slots count as
    /// not holding any letter.
    #[must_use]
    pub fn all_yellows_placed(&self) -> bool {
        self.yellows.iter().all(|&y| {
            self.slots
                .iter()
                .any(|slot| slot.assigned() == Some(y))
        })
    }

    /// Tentatively assign a letter to a slot during search
    ///
    /// Collapses the slot; if the letter was a yellow, it leaves the
    /// worklist and loses its priority boost in every other open slot.
    ///
    /// # Panics
    /// Debug-asserts that the slot is open and the letter is in its domain -
    /// violating either means the pruning upstream is broken.
    pub fn assign(&mut self, index: usize, letter: u8) {
        debug_assert!(!self.slots[index].is_collapsed(), "slot already assigned");
        debug_assert!(
            self.slots[index].contains(letter),
            "letter not in slot domain"
        );
        self.place(index, letter);
    }

    /// Collapse a slot to a letter and settle the yellow bookkeeping
    pub(crate) fn place(&mut self, index: usize, letter: u8) {
        self.slots[index].collapse_to(letter);
        if self.yellows.contains(&letter) {
            self.drop_yellow(letter);
            for (i, slot) in self.slots.iter_mut().enumerate() {
                if i != index && !slot.is_collapsed() {
                    slot.unboost(letter);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::FrequencyTable;

    fn table() -> FrequencyTable {
        FrequencyTable::from_words(&[])
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a'); // idempotent
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn letter_set_from_iter() {
        let set: LetterSet = [b'c', b'r', b'a', b'n', b'e'].into_iter().collect();
        assert_eq!(set.len(), 5);
        assert!(set.contains(b'n'));
    }

    #[test]
    fn domain_remove_and_contains() {
        let mut domain = Domain::from_ranked(b"sabre");
        assert_eq!(domain.len(), 5);
        assert!(domain.contains(b'b'));

        domain.remove(b'b');
        assert!(!domain.contains(b'b'));
        assert_eq!(domain.len(), 4);

        domain.remove(b'q'); // absent letter is a no-op
        assert_eq!(domain.len(), 4);
    }

    #[test]
    fn domain_remove_all() {
        let mut domain = Domain::from_ranked(b"sabre");
        let set: LetterSet = [b's', b'e'].into_iter().collect();
        domain.remove_all(set);
        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"abr");
    }

    #[test]
    fn domain_collapse() {
        let mut domain = Domain::from_ranked(b"sabre");
        assert!(!domain.is_collapsed());
        assert_eq!(domain.assigned(), None);

        domain.collapse_to(b'r');
        assert!(domain.is_collapsed());
        assert_eq!(domain.assigned(), Some(b'r'));
        assert_eq!(domain.len(), 1);
    }

    #[test]
    fn domain_boost_moves_to_front() {
        let mut domain = Domain::from_ranked(b"sabre");
        domain.boost(b'r');

        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"rsabe");
        assert!(domain.entries()[0].boosted);

        // boosting again is a no-op
        domain.boost(b'r');
        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"rsabe");
    }

    #[test]
    fn domain_boost_order_is_last_first() {
        let mut domain = Domain::from_ranked(b"sabre");
        domain.boost(b'r');
        domain.boost(b'e');

        // The most recently boosted letter is tried first
        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"ersab");
    }

    #[test]
    fn domain_unboost_restores_rank_position() {
        let mut domain = Domain::from_ranked(b"sabre");
        domain.boost(b'r');
        domain.unboost(b'r');

        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"sabre");
        assert!(domain.entries().iter().all(|e| !e.boosted));
    }

    #[test]
    fn domain_unboost_keeps_other_boosts() {
        let mut domain = Domain::from_ranked(b"sabre");
        domain.boost(b'r');
        domain.boost(b'e');
        domain.unboost(b'e');

        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"rsabe");
    }

    #[test]
    fn domain_unboost_without_boost_is_noop() {
        let mut domain = Domain::from_ranked(b"sabre");
        domain.unboost(b'r');
        let letters: Vec<u8> = domain.letters().collect();
        assert_eq!(letters, b"sabre");
    }

    #[test]
    fn candidate_fresh_state() {
        let cand = Candidate::new(&table());
        assert!(cand.yellows().is_empty());
        for i in 0..WORD_LEN {
            assert_eq!(cand.slot(i).len(), 26);
            assert!(cand.exclusions(i).is_empty());
        }
        assert!(!cand.is_fully_collapsed());
        assert_eq!(cand.assigned_word(), None);
    }

    #[test]
    fn candidate_assign_drops_yellow_and_unboosts() {
        let mut cand = Candidate::new(&table());
        cand.push_yellow(b'r');
        for i in 0..WORD_LEN {
            cand.slot_mut(i).boost(b'r');
        }

        cand.assign(2, b'r');

        assert!(cand.yellows().is_empty());
        assert_eq!(cand.slot(2).assigned(), Some(b'r'));
        // other slots keep the letter but without priority
        for i in [0, 1, 3, 4] {
            assert!(cand.slot(i).contains(b'r'));
            assert!(cand.slot(i).entries().iter().all(|e| !e.boosted));
        }
    }

    #[test]
    fn candidate_clones_are_independent() {
        let mut original = Candidate::new(&table());
        original.push_yellow(b't');
        original.exclude(0, b'q');

        let mut clone = original.clone();
        clone.assign(0, b'a');
        clone.push_yellow(b'z');
        clone.exclude(3, b'w');

        // the original never observes the clone's mutations
        assert!(!original.slot(0).is_collapsed());
        assert_eq!(original.yellows(), b"t");
        assert!(!original.exclusions(3).contains(b'w'));
        assert!(original.exclusions(0).contains(b'q'));
    }

    #[test]
    fn candidate_yellow_worklist_deduplicates() {
        let mut cand = Candidate::new(&table());
        assert!(cand.push_yellow(b't'));
        assert!(!cand.push_yellow(b't'));
        assert_eq!(cand.yellows(), b"t");
    }

    #[test]
    fn candidate_assigned_word_when_collapsed() {
        let mut cand = Candidate::new(&table());
        for (i, &letter) in b"shirt".iter().enumerate() {
            cand.slot_mut(i).collapse_to(letter);
        }
        assert!(cand.is_fully_collapsed());
        assert_eq!(cand.assigned_word().unwrap().text(), "shirt");
    }

    #[test]
    fn candidate_yellow_placement_check() {
        let mut cand = Candidate::new(&table());
        cand.push_yellow(b't');
        for (i, &letter) in b"shirt".iter().enumerate() {
            cand.slot_mut(i).collapse_to(letter);
        }
        assert!(cand.all_yellows_placed());

        let mut missing = Candidate::new(&table());
        missing.push_yellow(b'z');
        for (i, &letter) in b"shirt".iter().enumerate() {
            missing.slot_mut(i).collapse_to(letter);
        }
        assert!(!missing.all_yellows_placed());
    }
}
