//! Command implementations

pub mod frequency;
pub mod interactive;
pub mod suggest;

pub use frequency::{FrequencyReport, SlotFrequencies, frequency_report};
pub use interactive::run_interactive;
pub use suggest::{AppliedRound, SuggestResult, suggest_word};
