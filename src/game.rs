//! The puzzle itself: a secret word that answers guesses with feedback.

use crate::error::SolveError;
use crate::feedback::{Feedback, FeedbackMode};

/// One puzzle instance. Created per secret word and discarded after the solve.
#[derive(Debug, Clone)]
pub struct Game {
    secret: String,
    num_guesses: usize,
    mode: FeedbackMode,
}

impl Game {
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_mode(secret, FeedbackMode::default())
    }

    pub fn with_mode(secret: impl Into<String>, mode: FeedbackMode) -> Self {
        Self {
            secret: secret.into(),
            num_guesses: 0,
            mode,
        }
    }

    /// Score `guess` against the secret and count it as one guess.
    ///
    /// A guess whose length differs from the secret is rejected and not counted.
    pub fn ask(&mut self, guess: &str) -> Result<Feedback, SolveError> {
        if guess.len() != self.secret.len() {
            return Err(SolveError::LengthMismatch {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }
        self.num_guesses += 1;
        Ok(Feedback::calculate(guess, &self.secret, self.mode))
    }

    /// True iff the feedback is all exact matches for a word of the secret's length.
    pub fn is_win(&self, feedback: &Feedback) -> bool {
        feedback.len() == self.secret.len() && feedback.is_win()
    }

    pub fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn mode(&self) -> FeedbackMode {
        self.mode
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({}, {})", self.secret, self.num_guesses)
    }
}
