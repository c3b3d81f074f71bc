//! Information-gain agent
//!
//! Scores every vocabulary word by the Shannon entropy of the feedback it would
//! produce on each active board's remaining candidates, summed over boards.

use super::knowledge::filter_candidates;
use super::{Agent, AgentReply, Observation};
use crate::core::{PATTERN_COUNT, Word, score};
use crate::error::AgentError;
use crate::wordlists::Vocabulary;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use wordle_nine::core::Word;
/// use wordle_nine::agent::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; PATTERN_COUNT];
    for &candidate in candidates {
        counts[usize::from(score(guess, candidate).value())] += 1;
    }

    shannon_entropy(&counts)
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use wordle_nine::agent::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Summed-entropy solver over all active boards
pub struct EntropyAgent<'v> {
    vocabulary: &'v Vocabulary,
}

/// A guess and how good it looks across boards
#[derive(Debug, Clone, Copy)]
struct Rated<'v> {
    word: &'v Word,
    entropy: f64,
    /// Number of boards on which the guess could be the target
    hits: usize,
}

impl Rated<'_> {
    /// Higher entropy, then more possible wins, then alphabetical
    fn cmp_quality(&self, other: &Self) -> Ordering {
        self.entropy
            .total_cmp(&other.entropy)
            .then(self.hits.cmp(&other.hits))
            .then_with(|| other.word.text().cmp(self.word.text()))
    }
}

impl<'v> EntropyAgent<'v> {
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Pick the best guess for the observed boards
    ///
    /// A board with a single remaining candidate is solved outright first.
    /// Boards whose target lies outside the vocabulary end up with no
    /// candidates and are ignored.
    fn select_guess(&self, observation: &Observation<'_>) -> Option<&'v Word> {
        let guessed = observation.guessed_set();
        let pool = self.vocabulary.words();

        let candidate_sets: Vec<Vec<&'v Word>> = observation
            .active_boards()
            .map(|board| filter_candidates(pool, board.history()))
            .filter(|candidates| !candidates.is_empty())
            .collect();

        if let Some(sure) = candidate_sets
            .iter()
            .filter(|candidates| candidates.len() == 1)
            .map(|candidates| candidates[0])
            .find(|word| !guessed.contains(word.text()))
        {
            debug!(guess = %sure, "board has a single candidate");
            return Some(sure);
        }

        let best = pool
            .par_iter()
            .filter(|word| !guessed.contains(word.text()))
            .map(|word| Rated {
                word,
                entropy: candidate_sets
                    .iter()
                    .map(|candidates| calculate_entropy(word, candidates))
                    .sum(),
                hits: candidate_sets
                    .iter()
                    .filter(|candidates| candidates.contains(&word))
                    .count(),
            })
            .max_by(Rated::cmp_quality)?;

        debug!(
            guess = %best.word,
            entropy = best.entropy,
            hits = best.hits,
            boards = candidate_sets.len(),
            "selected guess"
        );

        Some(best.word)
    }
}

impl Agent for EntropyAgent<'_> {
    fn next_guess(&mut self, observation: &Observation<'_>) -> Result<AgentReply, AgentError> {
        self.select_guess(observation)
            .map(|word| AgentReply::Guess(word.text().to_string()))
            .ok_or_else(|| AgentError::NoGuess("every vocabulary word was already guessed".into()))
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}
