//! Per-slot letter frequency ranking
//!
//! For each of the five positions, all 26 letters are ranked by how often
//! they appear at that position across the dictionary. The ranking only
//! seeds the default domain ordering; it carries no scoring weight beyond
//! that.

use crate::core::{WORD_LEN, Word};

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Letters ranked by observed frequency, per slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    // ranking[slot] holds all 26 lowercase letters, most frequent first
    ranking: [[u8; ALPHABET_LEN]; WORD_LEN],
}

impl FrequencyTable {
    /// Build the table from a word list
    ///
    /// Ties are broken alphabetically, so letters never observed at a
    /// position trail the ranking in alphabetical order. The result is
    /// deterministic for a given dictionary.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [[0_usize; ALPHABET_LEN]; WORD_LEN];
        for word in words {
            for (slot, &letter) in word.chars().iter().enumerate() {
                counts[slot][usize::from(letter - b'a')] += 1;
            }
        }

        let mut ranking = [[0_u8; ALPHABET_LEN]; WORD_LEN];
        for slot in 0..WORD_LEN {
            let mut letters: Vec<u8> = (b'a'..=b'z').collect();
            letters.sort_by_key(|&l| {
                (std::cmp::Reverse(counts[slot][usize::from(l - b'a')]), l)
            });
            ranking[slot].copy_from_slice(&letters);
        }

        Self { ranking }
    }

    /// The full ranking for one slot, most frequent letter first
    ///
    /// # Panics
    /// Panics if slot >= 5
    #[inline]
    #[must_use]
    pub const fn ranking(&self, slot: usize) -> &[u8; ALPHABET_LEN] {
        &self.ranking[slot]
    }
}
