//! Interactive CLI mode
//!
//! Text-based round loop: the solver proposes a word, the player enters the
//! feedback their game showed, and the constraints tighten until solved.

use crate::core::{Feedback, Word};
use crate::lexicon::Lexicon;
use crate::output::formatters::{domain_summary, feedback_to_emoji, yellows_summary};
use crate::solver::Solver;
use std::io::{self, Write as _};

/// Run the interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive(lexicon: &Lexicon) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Wordle Solver - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a word each turn from the letter constraints so far.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use X/x/-/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut solver = Solver::new(lexicon);
    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        let Some(guess) = solver.suggest() else {
            println!("\n❌ No word fits the feedback so far! A pattern may have a typo.");
            println!("Type 'new' to start over, or 'quit' to exit.\n");

            match get_user_input("Command")?.to_lowercase().as_str() {
                "new" | "n" => {
                    solver.reset();
                    history.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}");
        println!("────────────────────────────────────────────────────────────");

        println!("\n📊 Suggested guess: {}", guess.text().to_uppercase());
        println!(
            "   Pending yellows:  {}",
            yellows_summary(solver.candidate().yellows())
        );
        let slots: Vec<String> = (0..crate::core::WORD_LEN)
            .map(|i| {
                let domain = solver.candidate().slot(i);
                domain_summary(domain.len(), domain.assigned())
            })
            .collect();
        println!("   Slot domains:     {}\n", slots.join(" | "));

        // Get feedback
        let feedback = loop {
            let input = get_user_input("Enter feedback (G/Y/X, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    solver.reset();
                    history.clear();
                    // the turn increment below is skipped on this path
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => {
                    // Shortcut for all greens (perfect match)
                    break Some(Feedback::PERFECT);
                }
                _ => match input.parse::<Feedback>() {
                    Ok(feedback) => break Some(feedback),
                    Err(_) => {
                        println!("❌ Invalid pattern! Use G/Y/X, 'win', or '🟩🟨⬜🟩🟨'\n");
                    }
                },
            }
        };

        if let Some(feedback) = feedback {
            if feedback.is_perfect() {
                history.push((guess, feedback));
                print_victory(&history, turn);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        solver.reset();
                        history.clear();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            } else if let Err(err) = solver.apply_feedback(&guess, &feedback) {
                // The session is untouched; the player can retype the line
                println!("\n❌ {err}");
                println!("That round was not applied. Enter the feedback again.\n");
                continue;
            } else {
                history.push((guess, feedback));
            }

            turn += 1;
        }
    }
}

fn print_victory(history: &[(Word, Feedback)], turn: usize) {
    use colored::Colorize;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback_to_emoji(feedback)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
