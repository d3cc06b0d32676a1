//! Constraints inferred from one guess and its feedback.

use crate::error::SolveError;
use crate::feedback::{Feedback, FeedbackMode, Verdict};

/// A single-position fact learned from feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The letter appears nowhere in the word.
    NoMatch(u8),
    /// The letter appears in the word, but not at this index.
    InWord(u8, usize),
    /// The letter is at this index.
    AtPosition(u8, usize),
}

impl Predicate {
    pub fn from_verdict(letter: u8, index: usize, verdict: Verdict) -> Self {
        match verdict {
            Verdict::No => Predicate::NoMatch(letter),
            Verdict::InWord => Predicate::InWord(letter, index),
            Verdict::AtPosition => Predicate::AtPosition(letter, index),
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        match *self {
            Predicate::NoMatch(c) => !bytes.contains(&c),
            Predicate::InWord(c, i) => bytes.contains(&c) && bytes.get(i) != Some(&c),
            Predicate::AtPosition(c, i) => bytes.get(i) == Some(&c),
        }
    }
}

/// Everything one `(guess, feedback)` pair says about the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// All predicates must hold.
    All(Vec<Predicate>),
    /// Scoring the guess against the word must reproduce the feedback.
    Consistent { guess: String, feedback: Feedback },
}

impl Constraint {
    /// Build the constraint for `asked` having scored `feedback` under `mode`.
    pub fn compile(asked: &str, feedback: &Feedback, mode: FeedbackMode) -> Result<Self, SolveError> {
        if asked.len() != feedback.len() {
            return Err(SolveError::LengthMismatch {
                expected: asked.len(),
                actual: feedback.len(),
            });
        }

        let constraint = match mode {
            FeedbackMode::Presence => Constraint::All(
                asked
                    .bytes()
                    .zip(feedback.verdicts())
                    .enumerate()
                    .map(|(i, (c, &v))| Predicate::from_verdict(c, i, v))
                    .collect(),
            ),
            FeedbackMode::Budgeted => Constraint::Consistent {
                guess: asked.to_string(),
                feedback: feedback.clone(),
            },
        };
        Ok(constraint)
    }

    pub fn matches(&self, word: &str) -> bool {
        match self {
            Constraint::All(predicates) => predicates.iter().all(|p| p.matches(word)),
            Constraint::Consistent { guess, feedback } => {
                word.len() == guess.len()
                    && Feedback::calculate(guess, word, FeedbackMode::Budgeted) == *feedback
            }
        }
    }
}
