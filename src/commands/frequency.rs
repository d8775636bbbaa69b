//! Per-slot letter frequency report
//!
//! Counts how often each letter appears at each position across the
//! dictionary. The same counts, reduced to a ranking, seed the solver's
//! default domains; the report makes the ordering visible.

use crate::core::WORD_LEN;
use crate::lexicon::Lexicon;
use std::cmp::Reverse;

/// Ranked letter counts for one slot
pub struct SlotFrequencies {
    pub slot: usize,
    /// `(letter, count)` pairs, most frequent first, ties alphabetical
    pub letters: Vec<(u8, usize)>,
}

/// Result of the frequency command
pub struct FrequencyReport {
    pub total_words: usize,
    pub slots: Vec<SlotFrequencies>,
}

/// Count letters per slot across the dictionary, keeping the top `top` of each
#[must_use]
pub fn frequency_report(lexicon: &Lexicon, top: usize) -> FrequencyReport {
    let slots = (0..WORD_LEN)
        .map(|slot| {
            let mut counts = [0_usize; 26];
            for word in lexicon.words() {
                counts[usize::from(word.chars()[slot] - b'a')] += 1;
            }
            let mut letters: Vec<(u8, usize)> = counts
                .iter()
                .enumerate()
                .map(|(i, &count)| (b'a' + i as u8, count))
                .collect();
            letters.sort_by_key(|&(letter, count)| (Reverse(count), letter));
            letters.truncate(top);
            SlotFrequencies { slot, letters }
        })
        .collect();

    FrequencyReport {
        total_words: lexicon.len(),
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn lexicon(words: &[&str]) -> Lexicon {
        let words = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        Lexicon::new(words, Vec::new())
    }

    #[test]
    fn counts_letters_per_slot() {
        let lex = lexicon(&["crane", "crust", "slate"]);
        let report = frequency_report(&lex, 3);

        assert_eq!(report.total_words, 3);
        assert_eq!(report.slots.len(), WORD_LEN);
        // slot 0: c appears twice, s once
        assert_eq!(report.slots[0].letters[0], (b'c', 2));
        assert_eq!(report.slots[0].letters[1], (b's', 1));
    }

    #[test]
    fn ties_rank_alphabetically() {
        let lex = lexicon(&["lotus", "humid"]);
        let report = frequency_report(&lex, 2);

        assert_eq!(report.slots[0].letters, vec![(b'h', 1), (b'l', 1)]);
    }

    #[test]
    fn top_limits_each_slot() {
        let lex = lexicon(&["crane"]);
        let report = frequency_report(&lex, 1);

        for slot in &report.slots {
            assert_eq!(slot.letters.len(), 1);
        }
    }

    #[test]
    fn report_ordering_matches_the_domain_seed() {
        let lex = lexicon(&["lotus", "humid", "shirt"]);
        let report = frequency_report(&lex, 26);

        for slot in 0..WORD_LEN {
            let reported: Vec<u8> = report.slots[slot].letters.iter().map(|&(l, _)| l).collect();
            assert_eq!(reported, lex.frequencies().ranking(slot));
        }
    }
}
