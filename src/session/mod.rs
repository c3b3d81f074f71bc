//! Round driver and session bookkeeping
//!
//! A [`Session`] owns one [`BoardSet`](crate::core::BoardSet), asks an
//! [`Agent`](crate::agent::Agent) for a guess each round and moves from
//! `Running` to `Complete` once every board is finished, the guess budget is
//! spent or the agent gives up.

mod driver;
mod summary;

pub use driver::{CompletionReason, Session, SessionState};
pub use summary::{BoardSummary, SCORE_GREEN, SCORE_WIN, SCORE_YELLOW, SessionSummary};

use crate::core::DEFAULT_MAX_GUESSES;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Rejected guesses tolerated per round before the session is abandoned
pub const DEFAULT_MAX_INVALID_ATTEMPTS: usize = 3;

/// Knobs for a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Guesses per board, and rounds per session
    pub max_guesses: usize,
    /// Rejections allowed in one round; one more ends the session.
    /// `None` never caps them.
    pub max_invalid_attempts: Option<usize>,
    /// Reject well-formed guesses that are not in the vocabulary
    pub require_vocabulary: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            max_invalid_attempts: Some(DEFAULT_MAX_INVALID_ATTEMPTS),
            require_vocabulary: false,
        }
    }
}

impl SessionConfig {
    /// The same config without a rejection cap, for a person at the keyboard
    #[must_use]
    pub const fn for_human(self) -> Self {
        Self {
            max_invalid_attempts: None,
            ..self
        }
    }
}

/// Seeded generator when a seed is given, otherwise one seeded from the OS
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}
