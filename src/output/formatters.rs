//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Elsewhere => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// Render a guess with each letter colored by its feedback mark
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let letter = (letter as char).to_ascii_uppercase().to_string();
            match mark {
                Mark::Absent => letter.bright_black().to_string(),
                Mark::Elsewhere => letter.yellow().bold().to_string(),
                Mark::Correct => letter.green().bold().to_string(),
            }
        })
        .collect()
}

/// Summarize a slot domain as "n letters" or the assigned letter
#[must_use]
pub fn domain_summary(len: usize, assigned: Option<u8>) -> String {
    match assigned {
        Some(letter) => format!("= {}", (letter as char).to_ascii_uppercase()),
        None => format!("{len} letters"),
    }
}

/// Render the yellow-letter worklist as "R, S" (uppercase, discovery order)
#[must_use]
pub fn yellows_summary(yellows: &[u8]) -> String {
    if yellows.is_empty() {
        return "none".to_string();
    }
    yellows
        .iter()
        .map(|&y| (y as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Width of the widest bar in a frequency chart, for scaling
pub const FREQUENCY_BAR_WIDTH: usize = 30;

/// Render a count as a proportional bar against the slot maximum
#[must_use]
pub fn frequency_bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * FREQUENCY_BAR_WIDTH).div_ceil(max).min(FREQUENCY_BAR_WIDTH);
    "█".repeat(filled)
}
