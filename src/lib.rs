//! # Word Sleuth
//!
//! A word-guessing puzzle engine and a solver for it.
//!
//! Each guess is answered with one [`Verdict`] per letter. The solver keeps
//! the words still consistent with every answer so far, ranks them by how
//! common their letters are, and proposes the best one, either to a scripted
//! [`Game`] or to a human through the [`Interactive`] oracle.

pub mod constraint;
pub mod error;
pub mod feedback;
pub mod game;
pub mod oracle;
pub mod rank;
pub mod solver;
pub mod vocab;

pub use constraint::{Constraint, Predicate};
pub use error::{SolveError, VocabError};
pub use feedback::{Feedback, FeedbackMode, Verdict};
pub use game::Game;
pub use oracle::{Answer, Interactive, Oracle};
pub use solver::{GuessDistribution, SolveObserver, Solver, SolverOptions};
pub use vocab::VocabLoader;

/// Word length of the canonical game
pub const WORD_LENGTH: usize = 5;

/// The embedded dictionary of five-letter words
pub const DICTIONARY: &str = include_str!("../dictionary/words.txt");

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<String> {
    vocab::parse_words(DICTIONARY)
}
