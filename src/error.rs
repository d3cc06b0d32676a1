//! Failure modes for games, solves and vocabulary loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::feedback::FeedbackMode;

/// Failure modes for a single solve attempt.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Every candidate was ruled out before a win.
    #[error("candidate set exhausted after {guesses} guesses")]
    Exhausted { guesses: usize },
    /// The oracle accepts neither a single proposal nor a list of suggestions.
    #[error("oracle does not accept any proposals")]
    UnrecognizedOracle,
    /// The solver and the oracle disagree on how feedback is scored.
    #[error("solver scores feedback as {solver:?} but the oracle uses {oracle:?}")]
    ModeMismatch {
        solver: FeedbackMode,
        oracle: FeedbackMode,
    },
    /// A guess or feedback did not have the length of the word it belongs to.
    #[error("expected length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The operator's input stream ended before a winning answer.
    #[error("input closed before the puzzle was solved")]
    InputClosed,
    #[error("i/o error")]
    Io(#[from] io::Error),
}

/// Failure modes for the vocabulary loader.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("did not recognize vocabulary {0:?}")]
    Unknown(String),
    #[error("failed to read vocabulary file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("vocabulary {0:?} contains no words")]
    Empty(String),
}
