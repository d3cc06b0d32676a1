//! Feedback calculation for guesses.
//!
//! This module turns a guess into one verdict per letter position, either with
//! the presence-based rules the engine has always used or with the
//! count-budgeted rules of the newspaper game.

use std::fmt;

/// Represents the verdict for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter not in word
    No,
    /// Letter in word, but somewhere else
    InWord,
    /// Letter in word at this position
    AtPosition,
}

impl Verdict {
    /// Convert to the operator's input symbol
    pub fn to_symbol(self) -> char {
        match self {
            Verdict::No => 'n',
            Verdict::InWord => 'p',
            Verdict::AtPosition => 'e',
        }
    }

    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Verdict::No => '⬛',
            Verdict::InWord => '🟨',
            Verdict::AtPosition => '🟩',
        }
    }

    /// Parse from an operator symbol (n=no match, p=partial, e=exact)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Verdict::No),
            'p' => Some(Verdict::InWord),
            'e' => Some(Verdict::AtPosition),
            _ => None,
        }
    }
}

/// How repeated letters are accounted for when scoring a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackMode {
    /// Every guess letter found anywhere in the secret is `InWord`, no matter
    /// how many times the guess repeats it.
    #[default]
    Presence,
    /// Each secret letter can justify at most one `AtPosition` or `InWord`
    /// verdict; exact matches are granted first, then left to right.
    Budgeted,
}

/// The ordered verdicts for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// A winning feedback for a word of `len` letters.
    pub fn all_correct(len: usize) -> Self {
        Self(vec![Verdict::AtPosition; len])
    }

    /// Calculate the feedback for a guess against a secret word.
    ///
    /// Positions are paired up to the shorter of the two words; callers that
    /// need equal lengths check them before scoring.
    pub fn calculate(guess: &str, secret: &str, mode: FeedbackMode) -> Self {
        match mode {
            FeedbackMode::Presence => Self::calculate_presence(guess, secret),
            FeedbackMode::Budgeted => Self::calculate_budgeted(guess, secret),
        }
    }

    fn calculate_presence(guess: &str, secret: &str) -> Self {
        let secret_bytes = secret.as_bytes();
        let mut in_secret = [false; 256];
        for &b in secret_bytes {
            in_secret[b as usize] = true;
        }

        let verdicts = guess
            .bytes()
            .zip(secret_bytes)
            .map(|(g, &s)| {
                if g == s {
                    Verdict::AtPosition
                } else if in_secret[g as usize] {
                    Verdict::InWord
                } else {
                    Verdict::No
                }
            })
            .collect();
        Self(verdicts)
    }

    fn calculate_budgeted(guess: &str, secret: &str) -> Self {
        let guess_bytes = guess.as_bytes();
        let secret_bytes = secret.as_bytes();
        let len = guess_bytes.len().min(secret_bytes.len());

        let mut verdicts = vec![Verdict::No; len];
        let mut secret_remaining = [0u8; 256];

        for i in 0..len {
            if guess_bytes[i] == secret_bytes[i] {
                verdicts[i] = Verdict::AtPosition;
            } else {
                secret_remaining[secret_bytes[i] as usize] += 1;
            }
        }

        for i in 0..len {
            if verdicts[i] != Verdict::AtPosition {
                let idx = guess_bytes[i] as usize;
                if secret_remaining[idx] > 0 {
                    verdicts[i] = Verdict::InWord;
                    secret_remaining[idx] -= 1;
                }
            }
        }

        Self(verdicts)
    }

    /// Parse the operator's answer, e.g. "nnpee", for a word of `len` letters.
    ///
    /// Returns `None` when the length is wrong or a symbol is not one of
    /// `n`, `p` or `e`.
    pub fn parse(s: &str, len: usize) -> Option<Self> {
        if s.chars().count() != len {
            return None;
        }
        let verdicts: Option<Vec<_>> = s.chars().map(Verdict::from_symbol).collect();
        verdicts.map(Self)
    }

    /// Check if every position is an exact match
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::AtPosition)
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl From<Vec<Verdict>> for Feedback {
    fn from(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self
            .0
            .iter()
            .map(|v| v.to_symbol().to_ascii_uppercase())
            .collect();
        write!(f, "{}", symbols)
    }
}
