//! Letter-frequency solver.
//!
//! Each round the remaining candidates are ranked by how common their letters
//! are among the candidates themselves, the best ones are proposed to an
//! [`Oracle`], and the feedback is compiled into a [`Constraint`] that prunes
//! the candidate set. The loop ends on a win, or fails once nothing is left.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::constraint::Constraint;
use crate::error::SolveError;
use crate::feedback::{Feedback, FeedbackMode};
use crate::game::Game;
use crate::oracle::Oracle;
use crate::rank::rank;

/// Tunables for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverOptions {
    /// Rules used to score and interpret feedback.
    pub mode: FeedbackMode,
}

impl SolverOptions {
    pub fn with_mode(mut self, mode: FeedbackMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Receives progress from a running solve.
pub trait SolveObserver {
    /// Called after every round with the guess played, its feedback and the
    /// number of candidates still consistent with everything seen so far.
    fn on_guess(&mut self, _guess: &str, _feedback: &Feedback, _remaining: usize) {}
}

impl SolveObserver for () {}

/// Histogram of solve lengths over a whole vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessDistribution {
    /// `(guesses, count)` pairs, ascending by guesses
    pub counts: Vec<(usize, usize)>,
    /// Secrets whose solve failed
    pub failures: usize,
}

impl GuessDistribution {
    pub fn solved(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Mean guesses per solved secret, `None` when nothing was solved.
    pub fn average(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let total_guesses: usize = self.counts.iter().map(|(g, c)| g * c).sum();
        Some(total_guesses as f64 / solved as f64)
    }

    pub fn max_guesses(&self) -> usize {
        self.counts.last().map(|(g, _)| *g).unwrap_or(0)
    }
}

impl fmt::Display for GuessDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR_WIDTH: usize = 40;
        let solved = self.solved();
        for &(guesses, count) in &self.counts {
            let share = count as f64 / solved as f64;
            let bar = "█".repeat((count * BAR_WIDTH / solved).max(1));
            writeln!(f, "{:>3} | {:>5} {:>5.1}% {}", guesses, count, share * 100.0, bar)?;
        }
        match self.average() {
            Some(average) => writeln!(f, "solved {} at {:.3} guesses each", solved, average)?,
            None => writeln!(f, "solved nothing")?,
        }
        if self.failures > 0 {
            writeln!(f, "failed {}", self.failures)?;
        }
        Ok(())
    }
}

/// Solves puzzles over a fixed, read-only vocabulary.
#[derive(Debug, Clone)]
pub struct Solver {
    words: Arc<[String]>,
    options: SolverOptions,
}

impl Solver {
    pub fn new(words: impl Into<Arc<[String]>>) -> Self {
        Self::with_options(words, SolverOptions::default())
    }

    pub fn with_options(words: impl Into<Arc<[String]>>, options: SolverOptions) -> Self {
        Self {
            words: words.into(),
            options,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Solve against `oracle`, returning every guess played, the winning one last.
    pub fn solve<O: Oracle + ?Sized>(&self, oracle: &mut O) -> Result<Vec<String>, SolveError> {
        self.solve_with_observer(oracle, &mut ())
    }

    pub fn solve_with_observer<O, S>(
        &self,
        oracle: &mut O,
        observer: &mut S,
    ) -> Result<Vec<String>, SolveError>
    where
        O: Oracle + ?Sized,
        S: SolveObserver + ?Sized,
    {
        let proposal_size = oracle.proposal_size();
        if proposal_size == 0 {
            return Err(SolveError::UnrecognizedOracle);
        }
        if let Some(oracle_mode) = oracle.mode() {
            if oracle_mode != self.options.mode {
                return Err(SolveError::ModeMismatch {
                    solver: self.options.mode,
                    oracle: oracle_mode,
                });
            }
        }

        let mut candidates = self.words.to_vec();
        let mut path = Vec::new();

        loop {
            rank(&mut candidates);
            if candidates.is_empty() {
                warn!("No candidates left after {} guesses", path.len());
                return Err(SolveError::Exhausted {
                    guesses: path.len(),
                });
            }

            let proposals = &candidates[..proposal_size.min(candidates.len())];
            let answer = oracle.ask(proposals)?;
            path.push(answer.guess.clone());

            if oracle.is_win(&answer.feedback) {
                info!("Solved with {:?} in {} guesses", answer.guess, path.len());
                observer.on_guess(&answer.guess, &answer.feedback, 1);
                return Ok(path);
            }

            let constraint = Constraint::compile(&answer.guess, &answer.feedback, self.options.mode)?;
            let before = candidates.len();
            candidates.retain(|word| constraint.matches(word));
            debug!(
                "Guess {:?} scored {} ({} -> {} candidates)",
                answer.guess,
                answer.feedback,
                before,
                candidates.len()
            );
            observer.on_guess(&answer.guess, &answer.feedback, candidates.len());
        }
    }

    /// Solve a puzzle knowing the secret word (for testing/benchmarking)
    pub fn solve_for_secret(&self, secret: &str) -> Result<Vec<String>, SolveError> {
        let mut game = Game::with_mode(secret, self.options.mode);
        self.solve(&mut game)
    }

    /// Solve for every word in the vocabulary. Failures are kept per word.
    pub fn solve_all(&self) -> Vec<(String, Result<Vec<String>, SolveError>)> {
        self.words
            .par_iter()
            .map(|secret| (secret.clone(), self.solve_for_secret(secret)))
            .collect()
    }

    /// Get distribution of guess counts across all words
    pub fn guess_distribution(&self) -> GuessDistribution {
        let results = self.solve_all();

        let mut failures = 0;
        let mut counts = Vec::new();
        for (secret, result) in results {
            match result {
                Ok(path) => {
                    let guesses = path.len();
                    if counts.len() <= guesses {
                        counts.resize(guesses + 1, 0usize);
                    }
                    counts[guesses] += 1;
                }
                Err(e) => {
                    warn!("Failed to solve {:?}: {}", secret, e);
                    failures += 1;
                }
            }
        }

        GuessDistribution {
            counts: counts
                .into_iter()
                .enumerate()
                .filter(|(_, count)| *count > 0)
                .collect(),
            failures,
        }
    }
}
