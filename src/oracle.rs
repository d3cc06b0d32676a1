//! Anything that can answer a guess with feedback.
//!
//! The solver drives a [`Game`] directly for scripted runs, or an
//! [`Interactive`] session where a human plays the real puzzle and types the
//! feedback back in.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::SolveError;
use crate::feedback::{Feedback, FeedbackMode};
use crate::game::Game;
use crate::vocab::is_word;
use crate::WORD_LENGTH;

/// Number of ranked suggestions shown to a human operator
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// The guess that was actually played, and what it scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub guess: String,
    pub feedback: Feedback,
}

/// Answers proposals from the solver.
pub trait Oracle {
    /// How many of the top ranked candidates this oracle wants per round.
    fn proposal_size(&self) -> usize;

    /// Play one round. `proposals` holds at most `proposal_size()` words,
    /// best first, and is never empty.
    fn ask(&mut self, proposals: &[String]) -> Result<Answer, SolveError>;

    /// Check if the feedback ends the puzzle.
    fn is_win(&self, feedback: &Feedback) -> bool;

    /// The scoring rules behind this oracle's feedback, when it knows them.
    /// A human relaying the real puzzle does not.
    fn mode(&self) -> Option<FeedbackMode> {
        None
    }
}

impl Oracle for Game {
    fn proposal_size(&self) -> usize {
        1
    }

    fn ask(&mut self, proposals: &[String]) -> Result<Answer, SolveError> {
        let guess = proposals.first().ok_or(SolveError::UnrecognizedOracle)?;
        let feedback = Game::ask(self, guess)?;
        Ok(Answer {
            guess: guess.clone(),
            feedback,
        })
    }

    fn is_win(&self, feedback: &Feedback) -> bool {
        Game::is_win(self, feedback)
    }

    fn mode(&self) -> Option<FeedbackMode> {
        Some(Game::mode(self))
    }
}

/// A human-in-the-loop oracle reading answers from `input` and prompting on `output`.
pub struct Interactive<R, W> {
    input: R,
    output: W,
    word_length: usize,
    suggestions: usize,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            word_length: WORD_LENGTH,
            suggestions: DEFAULT_SUGGESTIONS,
        }
    }

    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub fn with_suggestions(mut self, suggestions: usize) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, SolveError> {
        write!(self.output, " > ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SolveError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    fn retry(&mut self, reason: &str, input: &str) -> Result<(), SolveError> {
        debug!("Rejected operator input {:?}: {}", input, reason);
        writeln!(self.output, "Invalid input. Try again.")?;
        writeln!(self.output)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Oracle for Interactive<R, W> {
    fn proposal_size(&self) -> usize {
        self.suggestions
    }

    fn ask(&mut self, proposals: &[String]) -> Result<Answer, SolveError> {
        loop {
            writeln!(self.output, "The solver's top guesses are:")?;
            for proposal in proposals {
                writeln!(self.output, " * {}", proposal)?;
            }
            writeln!(self.output)?;
            writeln!(self.output, "What guess did you pick?")?;
            let guess = self.read_line()?;
            if guess.len() != self.word_length || !is_word(&guess) {
                self.retry("not a word of the right length", &guess)?;
                continue;
            }

            writeln!(self.output, "What is the feedback?")?;
            writeln!(
                self.output,
                "Enter a {} letter answer where",
                self.word_length
            )?;
            writeln!(self.output, " N => no match. That letter is not in the secret word")?;
            writeln!(
                self.output,
                " P => partial match. That letter is in the word, but not at that position"
            )?;
            writeln!(
                self.output,
                " E => exact match. That letter is in the word at that position"
            )?;
            let raw = self.read_line()?;
            match Feedback::parse(&raw, self.word_length) {
                Some(feedback) => return Ok(Answer { guess, feedback }),
                None => {
                    self.retry("malformed feedback", &raw)?;
                    continue;
                }
            }
        }
    }

    fn is_win(&self, feedback: &Feedback) -> bool {
        feedback.len() == self.word_length && feedback.is_win()
    }
}
