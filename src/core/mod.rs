//! Core domain types
//!
//! The fundamental types with zero external dependencies: validated
//! five-letter words and per-letter feedback marks.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{Word, WordError};

/// Number of letter slots in a word
pub const WORD_LEN: usize = 5;
