//! The nine-board controller
//!
//! Applies one shared guess to every active board per round. A round is
//! all-or-nothing: the guess is validated once before any board is touched.

use super::board::{Board, BoardStatus, GuessRecord};
use super::word::Word;
use crate::error::GameError;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

/// Number of concurrent boards in a session
pub const BOARD_COUNT: usize = 9;

/// What happened to one board during a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum BoardOutcome {
    /// Board was active at round start and received the guess
    Scored {
        board_id: usize,
        record: GuessRecord,
        status: BoardStatus,
    },
    /// Board was already finished and was skipped
    Frozen { board_id: usize, status: BoardStatus },
}

impl BoardOutcome {
    #[must_use]
    pub const fn board_id(&self) -> usize {
        match self {
            Self::Scored { board_id, .. } | Self::Frozen { board_id, .. } => *board_id,
        }
    }

    /// Status of the board after the round
    #[must_use]
    pub const fn status(&self) -> BoardStatus {
        match self {
            Self::Scored { status, .. } | Self::Frozen { status, .. } => *status,
        }
    }

    /// The new record, if the board was scored this round
    #[must_use]
    pub const fn record(&self) -> Option<&GuessRecord> {
        match self {
            Self::Scored { record, .. } => Some(record),
            Self::Frozen { .. } => None,
        }
    }
}

/// Result of applying one guess to the whole set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// 1-based round number
    pub round: usize,
    pub guess: Word,
    /// One entry per board, ordered by board id
    pub outcomes: Vec<BoardOutcome>,
}

impl RoundResult {
    /// Boards that went from active to won this round
    pub fn newly_won(&self) -> impl Iterator<Item = usize> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            BoardOutcome::Scored {
                board_id,
                status: BoardStatus::Won,
                ..
            } => Some(*board_id),
            _ => None,
        })
    }

    /// Number of boards that received the guess
    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.record().is_some())
            .count()
    }
}

/// Nine boards with pairwise distinct targets
#[derive(Debug, Clone)]
pub struct BoardSet {
    boards: Vec<Board>,
    rounds_played: usize,
}

impl BoardSet {
    /// Build a set from nine targets, one board per target in order
    ///
    /// # Errors
    /// Returns `GameError::DuplicateTarget` if any target appears twice.
    pub fn from_targets(
        targets: [Word; BOARD_COUNT],
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        for target in &targets {
            if !seen.insert(target.text()) {
                return Err(GameError::DuplicateTarget(target.text().to_string()));
            }
        }

        let boards = targets
            .into_iter()
            .enumerate()
            .map(|(id, target)| Board::new(id, target, max_guesses))
            .collect();

        Ok(Self {
            boards,
            rounds_played: 0,
        })
    }

    /// All boards in id order
    #[inline]
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, id: usize) -> Option<&Board> {
        self.boards.get(id)
    }

    /// Boards still accepting guesses
    pub fn active_boards(&self) -> impl Iterator<Item = &Board> {
        self.boards
            .iter()
            .filter(|board| board.status() == BoardStatus::Active)
    }

    /// True once every board is won or lost
    #[must_use]
    pub fn all_terminal(&self) -> bool {
        self.boards.iter().all(|board| board.status().is_terminal())
    }

    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Validate a raw guess and apply it to every active board
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the guess is not five ASCII
    /// letters. No board is modified in that case.
    pub fn apply_guess_to_all(&mut self, guess: &str) -> Result<RoundResult, GameError> {
        let word = Word::new(guess)?;
        Ok(self.apply_word(&word))
    }

    /// Apply an already validated guess to every active board
    ///
    /// Frozen boards are reported with their current status and not re-scored.
    ///
    /// # Panics
    /// Panics if an active board refuses the guess, which would mean the
    /// status bookkeeping is broken.
    pub fn apply_word(&mut self, guess: &Word) -> RoundResult {
        self.rounds_played += 1;

        let outcomes = self
            .boards
            .iter_mut()
            .map(|board| {
                let board_id = board.id();
                if board.status().is_terminal() {
                    return BoardOutcome::Frozen {
                        board_id,
                        status: board.status(),
                    };
                }

                let record = board
                    .apply_guess(guess)
                    .expect("active board must accept a guess");
                BoardOutcome::Scored {
                    board_id,
                    record,
                    status: board.status(),
                }
            })
            .collect();

        let result = RoundResult {
            round: self.rounds_played,
            guess: guess.clone(),
            outcomes,
        };

        debug!(
            round = result.round,
            guess = %guess,
            scored = result.scored_count(),
            "round applied"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_MAX_GUESSES;

    const TARGETS: [&str; BOARD_COUNT] = [
        "crane", "allow", "ghost", "brick", "power", "flame", "quiet", "jumbo", "sassy",
    ];

    fn targets() -> [Word; BOARD_COUNT] {
        TARGETS.map(|t| Word::new(t).unwrap())
    }

    fn board_set() -> BoardSet {
        BoardSet::from_targets(targets(), DEFAULT_MAX_GUESSES).unwrap()
    }

    #[test]
    fn from_targets_keeps_order() {
        let set = board_set();
        assert_eq!(set.boards().len(), BOARD_COUNT);
        for (i, board) in set.boards().iter().enumerate() {
            assert_eq!(board.id(), i);
            assert_eq!(board.target().text(), TARGETS[i]);
        }
        assert_eq!(set.active_boards().count(), BOARD_COUNT);
        assert!(!set.all_terminal());
    }

    #[test]
    fn from_targets_rejects_duplicates() {
        let mut t = targets();
        t[8] = Word::new("crane").unwrap();
        assert!(matches!(
            BoardSet::from_targets(t, DEFAULT_MAX_GUESSES),
            Err(GameError::DuplicateTarget(word)) if word == "crane"
        ));
    }

    #[test]
    fn guess_matching_one_target_wins_only_that_board() {
        let mut set = board_set();
        let result = set.apply_guess_to_all("ghost").unwrap();

        assert_eq!(result.round, 1);
        assert_eq!(result.newly_won().collect::<Vec<_>>(), vec![2]);
        assert_eq!(set.board(2).unwrap().status(), BoardStatus::Won);
        assert_eq!(set.active_boards().count(), BOARD_COUNT - 1);
        assert_eq!(result.scored_count(), BOARD_COUNT);
    }

    #[test]
    fn frozen_boards_are_skipped_and_reported() {
        let mut set = board_set();
        set.apply_guess_to_all("ghost").unwrap();
        let result = set.apply_guess_to_all("crane").unwrap();

        assert_eq!(result.outcomes.len(), BOARD_COUNT);
        assert_eq!(
            result.outcomes[2],
            BoardOutcome::Frozen {
                board_id: 2,
                status: BoardStatus::Won
            }
        );
        assert_eq!(set.board(2).unwrap().guesses_used(), 1);
        assert_eq!(set.board(0).unwrap().status(), BoardStatus::Won);
        assert_eq!(result.scored_count(), BOARD_COUNT - 1);

        let ids: Vec<usize> = result.outcomes.iter().map(BoardOutcome::board_id).collect();
        assert_eq!(ids, (0..BOARD_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_guess_mutates_nothing() {
        let mut set = board_set();
        set.apply_guess_to_all("audio").unwrap();

        for bad in ["toolong", "abc", "cr4ne", ""] {
            let err = set.apply_guess_to_all(bad).unwrap_err();
            assert!(matches!(err, GameError::InvalidGuessLength(_)));
        }

        assert_eq!(set.rounds_played(), 1);
        assert!(set.boards().iter().all(|b| b.guesses_used() == 1));
    }

    #[test]
    fn all_terminal_after_guess_limit() {
        let mut set = BoardSet::from_targets(targets(), 2).unwrap();
        set.apply_guess_to_all("audio").unwrap();
        assert!(!set.all_terminal());
        set.apply_guess_to_all("crane").unwrap();

        assert!(set.all_terminal());
        assert_eq!(set.board(0).unwrap().status(), BoardStatus::Won);
        assert_eq!(
            set.boards()
                .iter()
                .filter(|b| b.status() == BoardStatus::Lost)
                .count(),
            BOARD_COUNT - 1
        );
        assert!(set.boards().iter().all(|b| b.guesses_used() <= 2));
    }
}
