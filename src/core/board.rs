//! A single Wordle board
//!
//! Owns one target word, the ordered guess history and the lifecycle status.
//! The only mutation path is [`Board::apply_guess`].

use super::feedback::{Feedback, score};
use super::word::Word;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classic Wordle guess limit
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Lifecycle of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Active,
    Won,
    Lost,
}

impl BoardStatus {
    /// Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One scored guess on one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Single-game state
#[derive(Debug, Clone)]
pub struct Board {
    id: usize,
    target: Word,
    history: Vec<GuessRecord>,
    status: BoardStatus,
    max_guesses: usize,
}

impl Board {
    /// Create an active board with an empty history
    #[must_use]
    pub fn new(id: usize, target: Word, max_guesses: usize) -> Self {
        debug_assert!(max_guesses > 0, "a board needs at least one guess");
        Self {
            id,
            target,
            history: Vec::with_capacity(max_guesses),
            status: BoardStatus::Active,
            max_guesses,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> BoardStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Number of guesses applied so far
    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Score a guess against this board's target and record it
    ///
    /// Status becomes Won on an all-green feedback, otherwise Lost once the
    /// history reaches the guess limit.
    ///
    /// # Errors
    /// Returns `GameError::BoardAlreadyTerminal` if the board is Won or Lost;
    /// the board is left untouched.
    pub fn apply_guess(&mut self, guess: &Word) -> Result<GuessRecord, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::BoardAlreadyTerminal { board_id: self.id });
        }

        let feedback = score(guess, &self.target);
        let record = GuessRecord {
            guess: guess.clone(),
            feedback,
        };
        self.history.push(record.clone());

        self.status = if feedback.is_solved() {
            BoardStatus::Won
        } else if self.history.len() >= self.max_guesses {
            BoardStatus::Lost
        } else {
            BoardStatus::Active
        };

        debug!(
            board = self.id,
            guess = %guess,
            feedback = %feedback.to_emoji(),
            status = ?self.status,
            "scored guess"
        );

        Ok(record)
    }
}
