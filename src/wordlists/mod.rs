//! Word source for target draws and guess validation
//!
//! Provides the embedded vocabulary compiled into the binary and the
//! [`Vocabulary`] type that draws distinct targets for a session.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable list of valid words, free of duplicates
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words while keeping first-seen order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        Self { words, index }
    }

    /// The vocabulary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Draw `count` distinct words uniformly without replacement
    ///
    /// # Errors
    /// Returns `GameError::InsufficientVocabulary` if fewer than `count` words
    /// are available.
    pub fn draw_targets<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Word>, GameError> {
        if self.words.len() < count {
            return Err(GameError::InsufficientVocabulary {
                needed: count,
                available: self.words.len(),
            });
        }

        Ok(rand::seq::index::sample(rng, self.words.len(), count)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }
}
