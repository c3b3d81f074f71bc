//! Per-board results and the session score

use super::driver::CompletionReason;
use crate::core::{BoardSet, BoardStatus, GuessRecord, Word};
use serde::Serialize;

/// Points for each board won
pub const SCORE_WIN: usize = 100;
/// Points for each green tile across every guess on every board
pub const SCORE_GREEN: usize = 5;
/// Points for each yellow tile across every guess on every board
pub const SCORE_YELLOW: usize = 1;

/// Final state of one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub board_id: usize,
    pub target: Word,
    pub guesses: Vec<GuessRecord>,
    pub status: BoardStatus,
    pub guesses_used: usize,
}

impl BoardSummary {
    #[must_use]
    pub fn greens(&self) -> usize {
        self.guesses.iter().map(|r| r.feedback.count_greens()).sum()
    }

    #[must_use]
    pub fn yellows(&self) -> usize {
        self.guesses.iter().map(|r| r.feedback.count_yellows()).sum()
    }
}

/// Everything a reporter needs about a finished session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub completion: CompletionReason,
    /// Guesses rejected across all rounds
    pub invalid_guesses: usize,
    pub boards: Vec<BoardSummary>,
    pub boards_won: usize,
    /// Boards lost or left active by a forfeit
    pub boards_unsolved: usize,
    pub greens: usize,
    pub yellows: usize,
    pub score: usize,
}

impl SessionSummary {
    #[must_use]
    pub fn from_boards(
        set: &BoardSet,
        completion: CompletionReason,
        invalid_guesses: usize,
    ) -> Self {
        let boards: Vec<BoardSummary> = set
            .boards()
            .iter()
            .map(|board| BoardSummary {
                board_id: board.id(),
                target: board.target().clone(),
                guesses: board.history().to_vec(),
                status: board.status(),
                guesses_used: board.guesses_used(),
            })
            .collect();

        let boards_won = boards
            .iter()
            .filter(|board| board.status == BoardStatus::Won)
            .count();
        let greens = boards.iter().map(BoardSummary::greens).sum();
        let yellows = boards.iter().map(BoardSummary::yellows).sum();

        Self {
            rounds_played: set.rounds_played(),
            completion,
            invalid_guesses,
            boards_unsolved: boards.len() - boards_won,
            boards,
            boards_won,
            greens,
            yellows,
            score: boards_won * SCORE_WIN + greens * SCORE_GREEN + yellows * SCORE_YELLOW,
        }
    }

    /// Whether every board was solved
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.boards_unsolved == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::test_support::board_set;
    use crate::core::BOARD_COUNT;

    #[test]
    fn fresh_set_scores_zero() {
        let summary = SessionSummary::from_boards(&board_set(), CompletionReason::Forfeit, 0);

        assert_eq!(summary.rounds_played, 0);
        assert_eq!(summary.boards.len(), BOARD_COUNT);
        assert_eq!(summary.boards_won, 0);
        assert_eq!(summary.boards_unsolved, BOARD_COUNT);
        assert_eq!(summary.score, 0);
        assert!(!summary.is_perfect());
    }

    #[test]
    fn score_counts_wins_and_tiles() {
        let mut set = board_set();
        set.apply_guess_to_all("crane").unwrap();

        let summary = SessionSummary::from_boards(&set, CompletionReason::Forfeit, 2);
        let crane = &summary.boards[0];

        assert_eq!(crane.status, BoardStatus::Won);
        assert_eq!(crane.greens(), 5);
        assert_eq!(summary.boards_won, 1);
        assert_eq!(summary.invalid_guesses, 2);
        assert_eq!(
            summary.score,
            SCORE_WIN + summary.greens * SCORE_GREEN + summary.yellows * SCORE_YELLOW
        );
        // Every board saw the guess, so tile totals include the other eight
        assert!(summary.greens > 5);
    }

    #[test]
    fn board_summary_keeps_history() {
        let mut set = board_set();
        set.apply_guess_to_all("audio").unwrap();
        set.apply_guess_to_all("ghost").unwrap();

        let summary = SessionSummary::from_boards(&set, CompletionReason::Forfeit, 0);
        let ghost = &summary.boards[2];

        assert_eq!(ghost.target.text(), "ghost");
        assert_eq!(ghost.guesses_used, 2);
        assert_eq!(ghost.guesses[0].guess.text(), "audio");
        assert_eq!(ghost.status, BoardStatus::Won);
        assert_eq!(summary.rounds_played, 2);
    }
}
