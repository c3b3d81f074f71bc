//! Error types for sessions, boards and agents

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the board engine and the round driver
#[derive(Debug, Error)]
pub enum GameError {
    /// Vocabulary too small to draw distinct targets
    #[error("vocabulary has {available} words but {needed} distinct targets are required")]
    InsufficientVocabulary { needed: usize, available: usize },

    #[error("target '{0}' appears on more than one board")]
    DuplicateTarget(String),

    /// Guess is not exactly five ASCII letters; nothing was applied
    #[error("invalid guess: {0}")]
    InvalidGuessLength(#[from] WordError),

    /// Guess is well-formed but not in the vocabulary (strict mode only)
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    /// A guess reached a board that is already won or lost
    #[error("board {board_id} is already finished")]
    BoardAlreadyTerminal { board_id: usize },

    /// The session is complete and accepts no more guesses
    #[error("session is complete")]
    SessionComplete,

    #[error("agent failed: {0}")]
    Agent(#[from] AgentError),
}

impl GameError {
    /// Whether the round can be retried with a different guess
    #[must_use]
    pub const fn is_rejected_guess(&self) -> bool {
        matches!(self, Self::InvalidGuessLength(_) | Self::UnknownWord(_))
    }
}

/// Errors raised by guess-producing agents
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before a guess was entered")]
    InputClosed,

    #[error("no guess available: {0}")]
    NoGuess(String),
}
