//! Per-letter feedback from a guessing round
//!
//! Feedback holds one mark per slot:
//! - `Absent`: the letter is not in the word (gray)
//! - `Elsewhere`: the letter is in the word at a different position (yellow)
//! - `Correct`: the letter is at this exact position (green)

use super::WORD_LEN;
use std::fmt;

/// The result for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Letter is not in the word
    Absent,
    /// Letter is in the word, but not at this position
    Elsewhere,
    /// Letter is at this exact position
    Correct,
}

/// Feedback for a full five-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    marks: [Mark; WORD_LEN],
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (use X/-, Y, or G)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All correct (the guess was the word)
    pub const PERFECT: Self = Self {
        marks: [Mark::Correct; WORD_LEN],
    };

    /// Create feedback from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self { marks }
    }

    /// Parse a feedback string like "XXYGG", "--ygg" or "⬜⬜🟨🟩🟩"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for elsewhere
    /// - 'X'/'x'/'-'/'_'/⬜ for absent
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` for anything but five symbols
    /// and `FeedbackError::InvalidSymbol` for an unrecognized character.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Feedback, Mark};
    ///
    /// let fb = Feedback::parse("XXYGG").unwrap();
    /// assert_eq!(fb.mark(2), Mark::Elsewhere);
    /// assert_eq!(fb.mark(3), Mark::Correct);
    /// assert!(Feedback::parse("XYGG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            marks[i] = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Elsewhere,
                'X' | 'x' | '-' | '_' | '⬜' => Mark::Absent,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }

        Ok(Self { marks })
    }

    /// Get all five marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// Get the mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.marks[position]
    }

    /// Check if every mark is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            f.write_str(match mark {
                Mark::Correct => "G",
                Mark::Elsewhere => "Y",
                Mark::Absent => "X",
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_symbols() {
        let fb = Feedback::parse("XXYGG").unwrap();
        assert_eq!(fb.mark(0), Mark::Absent);
        assert_eq!(fb.mark(1), Mark::Absent);
        assert_eq!(fb.mark(2), Mark::Elsewhere);
        assert_eq!(fb.mark(3), Mark::Correct);
        assert_eq!(fb.mark(4), Mark::Correct);
    }

    #[test]
    fn parse_variants_equivalent() {
        let a = Feedback::parse("GY-GX").unwrap();
        let b = Feedback::parse("gy_gx").unwrap();
        let c = Feedback::parse("🟩🟨⬜🟩⬜").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        // Four symbols must be rejected before any solver state is touched
        assert!(matches!(
            Feedback::parse("XYGG"),
            Err(FeedbackError::InvalidLength(4))
        ));
        assert!(matches!(
            Feedback::parse("XYGGXX"),
            Err(FeedbackError::InvalidLength(6))
        ));
        assert!(matches!(
            Feedback::parse(""),
            Err(FeedbackError::InvalidLength(0))
        ));
    }

    #[test]
    fn parse_rejects_invalid_symbol() {
        assert!(matches!(
            Feedback::parse("XYZGG"),
            Err(FeedbackError::InvalidSymbol('Z'))
        ));
        assert!(matches!(
            Feedback::parse("XY GG"),
            Err(FeedbackError::InvalidSymbol(' '))
        ));
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert!(!Feedback::parse("GGGGY").unwrap().is_perfect());
        assert_eq!(Feedback::parse("GGGGG").unwrap(), Feedback::PERFECT);
    }

    #[test]
    fn explicit_marks_match_parsed() {
        let fb = Feedback::new([
            Mark::Absent,
            Mark::Elsewhere,
            Mark::Correct,
            Mark::Absent,
            Mark::Absent,
        ]);
        assert_eq!(fb, Feedback::parse("XYGXX").unwrap());
    }

    #[test]
    fn display_round_trips() {
        for s in ["XXYGG", "GGGGG", "XXXXX", "YGXYG"] {
            let fb = Feedback::parse(s).unwrap();
            assert_eq!(fb.to_string(), s);
        }
    }

    #[test]
    fn from_str_trait() {
        let fb: Feedback = "XYYGG".parse().unwrap();
        assert_eq!(fb.mark(1), Mark::Elsewhere);
        assert!("bogus".parse::<Feedback>().is_err());
    }
}
