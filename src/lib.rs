//! Wordle CSP Solver
//!
//! A Wordle suggestion engine that treats the next guess as a
//! constraint-satisfaction problem: five slot variables with letter domains,
//! pruned by per-round feedback and by letter-adjacency constraints, searched
//! with backtracking under an MRV heuristic.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_csp::core::{Feedback, Word};
//! use wordle_csp::lexicon::Lexicon;
//! use wordle_csp::solver::Solver;
//!
//! let words = vec![Word::new("shirt").unwrap(), Word::new("crane").unwrap()];
//! let lexicon = Lexicon::new(words, Vec::new());
//!
//! let mut solver = Solver::new(&lexicon);
//! let guess = Word::new("water").unwrap();
//! let feedback: Feedback = "XXYXX".parse().unwrap();
//! solver.apply_feedback(&guess, &feedback).unwrap();
//!
//! match solver.suggest() {
//!     Some(word) => println!("Suggested guess: {word}"),
//!     None => println!("No suggestion available"),
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary, adjacency pairs, and frequency tables
pub mod lexicon;

// Constraint engine and backtracking search
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
