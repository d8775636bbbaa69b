//! Loading utilities for word and pair lists
//!
//! Provides functions to load the dictionary and the adjacency pair table
//! from files or from the embedded constants.

use super::LetterPair;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary words from a file, one word per line
///
/// Returns valid `Word` instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_csp::lexicon::loader::load_words;
///
/// let words = load_words("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load adjacency-impossibility pairs from a file, one pair per line
///
/// Returns valid `LetterPair` instances, skipping blank and invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> io::Result<Vec<LetterPair>> {
    let content = fs::read_to_string(path)?;

    let pairs = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                LetterPair::parse(trimmed).ok()
            }
        })
        .collect();

    Ok(pairs)
}

/// Convert an embedded string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Convert an embedded string slice to a LetterPair vector
#[must_use]
pub fn pairs_from_slice(slice: &[&str]) -> Vec<LetterPair> {
    slice.iter().filter_map(|&s| LetterPair::parse(s).ok()).collect()
}
