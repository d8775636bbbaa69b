//! Constraint-propagation solver
//!
//! The solver models a hidden word as five letter domains ordered by
//! positional frequency. Feedback rounds prune and reorder the domains,
//! adjacency pairs keep neighboring slots consistent, and a backtracking
//! search over the remaining letters produces the next suggestion.

mod candidate;
mod engine;
mod init;
mod prune;
mod search;
mod select;

pub use candidate::{Candidate, Domain, DomainEntry, LetterSet};
pub use engine::Solver;
pub use init::{MAX_YELLOWS, RoundError};
pub use prune::prune_adjacent;
pub use search::Search;
pub use select::select_slot;
