//! Core domain types for nine-board Wordle
//!
//! Words, feedback scoring, single boards and the nine-board controller.
//! Everything here is synchronous and free of I/O.

mod board;
mod board_set;
mod feedback;
mod word;

pub use board::{Board, BoardStatus, DEFAULT_MAX_GUESSES, GuessRecord};
pub use board_set::{BOARD_COUNT, BoardOutcome, BoardSet, RoundResult};
pub use feedback::{Feedback, PATTERN_COUNT, Tile, score};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
