//! Output and display utilities

pub mod display;
pub mod formatters;

pub use display::{print_frequency_report, print_suggest_result};
