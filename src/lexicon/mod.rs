//! Dictionary, adjacency-impossibility pairs, and frequency tables
//!
//! The `Lexicon` is the read-only knowledge the solver works against: the set
//! of valid words (the sole solution-validity oracle), the table of letter
//! pairs that never occur adjacently, and the per-slot frequency ranking
//! derived from the dictionary. It is built once at startup and passed by
//! reference into the solver.

mod embedded;
mod frequency;
pub mod loader;

pub use embedded::{IMPOSSIBLE_PAIRS, IMPOSSIBLE_PAIRS_COUNT, WORDS, WORDS_COUNT};
pub use frequency::{ALPHABET_LEN, FrequencyTable};

use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// An ordered letter pair that never occurs adjacently in a valid word
///
/// `(first, second)` means "first immediately followed by second never
/// happens", so a collapsed slot holding `first` excludes `second` from its
/// right neighbor, and a collapsed slot holding `second` excludes `first`
/// from its left neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPair {
    pub first: u8,
    pub second: u8,
}

/// Error type for invalid pair entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Letter pair must be exactly 2 letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Letter pair contains invalid characters"),
        }
    }
}

impl std::error::Error for PairError {}

impl LetterPair {
    /// Parse a pair from a two-letter string like "qx"
    ///
    /// # Errors
    /// Returns `PairError` for anything but two ASCII letters.
    pub fn parse(s: &str) -> Result<Self, PairError> {
        let text = s.trim().to_lowercase();
        if text.len() != 2 {
            return Err(PairError::InvalidLength(text.len()));
        }
        let bytes = text.as_bytes();
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(PairError::InvalidCharacters);
        }
        Ok(Self {
            first: bytes[0],
            second: bytes[1],
        })
    }
}

impl fmt::Display for LetterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first as char, self.second as char)
    }
}

/// Immutable solver knowledge: dictionary, adjacency pairs, frequencies
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LEN]>,
    pairs: Vec<LetterPair>,
    frequencies: FrequencyTable,
}

impl Lexicon {
    /// Build a lexicon from a word list and an adjacency pair table
    ///
    /// The frequency table is derived from the word list.
    #[must_use]
    pub fn new(words: Vec<Word>, pairs: Vec<LetterPair>) -> Self {
        let index = words.iter().map(|w| *w.chars()).collect();
        let frequencies = FrequencyTable::from_words(&words);
        Self {
            words,
            index,
            pairs,
            frequencies,
        }
    }

    /// Build the default lexicon from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(WORDS);
        let pairs = loader::pairs_from_slice(IMPOSSIBLE_PAIRS);
        Self::new(words, pairs)
    }

    /// Exact-match membership test, the solution-validity oracle
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Membership test on raw letters (already lowercase)
    #[inline]
    #[must_use]
    pub fn contains_letters(&self, letters: &[u8; WORD_LEN]) -> bool {
        self.index.contains(letters)
    }

    /// All dictionary words, in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The adjacency-impossibility table
    #[must_use]
    pub fn pairs(&self) -> &[LetterPair] {
        &self.pairs
    }

    /// Per-slot letter frequency ranking
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Number of dictionary words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(texts: &[&str]) -> Lexicon {
        let words = texts.iter().map(|t| Word::new(*t).unwrap()).collect();
        Lexicon::new(words, Vec::new())
    }

    #[test]
    fn contains_is_exact_match() {
        let lex = lexicon(&["crane", "slate"]);
        assert!(lex.contains(&Word::new("crane").unwrap()));
        assert!(lex.contains(&Word::new("CRANE").unwrap())); // normalized
        assert!(!lex.contains(&Word::new("shirt").unwrap()));
    }

    #[test]
    fn contains_letters_matches_contains() {
        let lex = lexicon(&["crane"]);
        assert!(lex.contains_letters(b"crane"));
        assert!(!lex.contains_letters(b"cranx"));
    }

    #[test]
    fn pair_parse_valid() {
        let pair = LetterPair::parse("QX").unwrap();
        assert_eq!(pair.first, b'q');
        assert_eq!(pair.second, b'x');
        assert_eq!(pair.to_string(), "qx");
    }

    #[test]
    fn pair_parse_invalid() {
        assert!(matches!(
            LetterPair::parse("q"),
            Err(PairError::InvalidLength(1))
        ));
        assert!(matches!(
            LetterPair::parse("qxz"),
            Err(PairError::InvalidLength(3))
        ));
        assert!(matches!(
            LetterPair::parse("q1"),
            Err(PairError::InvalidCharacters)
        ));
    }

    #[test]
    fn embedded_words_are_valid() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_pairs_are_valid() {
        assert_eq!(IMPOSSIBLE_PAIRS.len(), IMPOSSIBLE_PAIRS_COUNT);
        for &pair in IMPOSSIBLE_PAIRS {
            assert!(LetterPair::parse(pair).is_ok(), "bad pair entry '{pair}'");
        }
    }

    #[test]
    fn embedded_pairs_never_occur_in_embedded_words() {
        // An adjacency pair that appears inside a dictionary word would prune
        // away a legitimate answer.
        let lex = Lexicon::embedded();
        for word in lex.words() {
            let chars = word.chars();
            for i in 0..chars.len() - 1 {
                for pair in lex.pairs() {
                    assert!(
                        !(chars[i] == pair.first && chars[i + 1] == pair.second),
                        "pair '{pair}' occurs in dictionary word '{word}'"
                    );
                }
            }
        }
    }

    #[test]
    fn embedded_lexicon_builds() {
        let lex = Lexicon::embedded();
        assert_eq!(lex.len(), WORDS_COUNT);
        assert!(!lex.is_empty());
        assert!(lex.contains(&Word::new("crane").unwrap()));
        assert!(lex.contains(&Word::new("water").unwrap()));
    }
}
