//! Letter-frequency ranking of candidate words.
//!
//! A word scores the sum of the frequencies of its distinct letters, where a
//! letter's frequency is the number of candidates containing it. Guessing the
//! highest scorer tests the letters that split the remaining set the most.

/// How many candidate words contain each byte value.
#[derive(Debug, Clone)]
pub struct LetterCounts([usize; 256]);

impl LetterCounts {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts = [0usize; 256];
        for word in words {
            let mut seen = [false; 256];
            for b in word.as_ref().bytes() {
                if !seen[b as usize] {
                    seen[b as usize] = true;
                    counts[b as usize] += 1;
                }
            }
        }
        Self(counts)
    }

    pub fn get(&self, letter: u8) -> usize {
        self.0[letter as usize]
    }

    /// Sum of the counts of the distinct letters in `word`
    pub fn score_word(&self, word: &str) -> usize {
        let mut seen = [false; 256];
        let mut score = 0;
        for b in word.bytes() {
            if !seen[b as usize] {
                seen[b as usize] = true;
                score += self.0[b as usize];
            }
        }
        score
    }
}

/// Reorder `words` best first. Ties keep their relative input order.
pub fn rank(words: &mut [String]) {
    let counts = LetterCounts::from_words(words);
    words.sort_by_cached_key(|w| std::cmp::Reverse(counts.score_word(w)));
}
