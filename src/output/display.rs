//! Display functions for command results

use super::formatters::{colorize_guess, feedback_to_emoji, frequency_bar, yellows_summary};
use crate::commands::{FrequencyReport, SuggestResult};
use colored::Colorize;

/// Print the result of the suggest command
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "Round {}: {} {}",
            i + 1,
            colorize_guess(&round.guess, &round.feedback),
            feedback_to_emoji(&round.feedback)
        );
    }
    if !result.rounds.is_empty() {
        println!("{}", "─".repeat(60).cyan());
    }

    println!(
        "Pending yellows: {}",
        yellows_summary(&result.pending_yellows)
    );

    match &result.suggestion {
        Some(word) => {
            println!(
                "\n{} {}",
                "Suggested guess:".bright_cyan().bold(),
                word.text().to_uppercase().bright_yellow().bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "❌ No word in the dictionary fits this feedback."
                    .red()
                    .bold()
            );
        }
    }
    println!();
}

/// Print the per-slot frequency report
pub fn print_frequency_report(report: &FrequencyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words",
        "LETTER FREQUENCY BY SLOT:".bright_cyan().bold(),
        report.total_words
    );
    println!("{}", "═".repeat(60).cyan());

    for slot in &report.slots {
        let max = slot.letters.first().map_or(0, |&(_, count)| count);
        println!("\nSlot {}:", slot.slot + 1);
        for &(letter, count) in &slot.letters {
            println!(
                "  {} {:>5}  {}",
                (letter as char).to_ascii_uppercase(),
                count,
                frequency_bar(count, max).green()
            );
        }
    }
    println!();
}
