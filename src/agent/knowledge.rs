//! Letter knowledge derived from a board's feedback history

use crate::core::{ALPHABET_SIZE, GuessRecord, Tile, WORD_LENGTH, Word, score};

/// Loose letter constraints for one board
///
/// A letter is grey only if it never showed up yellow or green on that board,
/// since a repeated guess letter can be grey while another copy scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    grey: [bool; ALPHABET_SIZE],
    yellow: [bool; ALPHABET_SIZE],
    green: [Option<u8>; WORD_LENGTH],
}

impl LetterKnowledge {
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut knowledge = Self::default();

        for record in history {
            for (i, (&letter, &tile)) in record
                .guess
                .chars()
                .iter()
                .zip(record.feedback.tiles())
                .enumerate()
            {
                let idx = usize::from(letter - b'a');
                match tile {
                    Tile::Correct => knowledge.green[i] = Some(letter),
                    Tile::Present => knowledge.yellow[idx] = true,
                    Tile::Absent => knowledge.grey[idx] = true,
                }
            }
        }

        for idx in 0..ALPHABET_SIZE {
            let letter = b'a' + idx as u8;
            if knowledge.yellow[idx] || knowledge.green.contains(&Some(letter)) {
                knowledge.grey[idx] = false;
            }
        }

        knowledge
    }

    #[must_use]
    pub fn is_grey(&self, letter: u8) -> bool {
        self.grey[usize::from(letter - b'a')]
    }

    #[must_use]
    pub fn is_yellow(&self, letter: u8) -> bool {
        self.yellow[usize::from(letter - b'a')]
    }

    #[must_use]
    pub fn is_green(&self, letter: u8) -> bool {
        self.green.contains(&Some(letter))
    }

    /// Whether the letter has shown up in any feedback
    #[must_use]
    pub fn is_known(&self, letter: u8) -> bool {
        self.is_grey(letter) || self.is_yellow(letter) || self.is_green(letter)
    }

    /// No grey letters, every yellow letter present, greens in place
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let no_grey = word.chars().iter().all(|&ch| !self.is_grey(ch));
        let has_yellows = (0..ALPHABET_SIZE)
            .filter(|&idx| self.yellow[idx])
            .all(|idx| word.has_letter(b'a' + idx as u8));
        let greens_in_place = self
            .green
            .iter()
            .enumerate()
            .all(|(i, green)| green.is_none_or(|letter| word.char_at(i) == letter));

        no_grey && has_yellows && greens_in_place
    }
}

/// Whether `candidate` would have produced exactly the recorded feedback
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[GuessRecord]) -> bool {
    history
        .iter()
        .all(|record| score(&record.guess, candidate) == record.feedback)
}

/// Words from `pool` that could still be the target of a board with `history`
#[must_use]
pub fn filter_candidates<'a>(pool: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    pool.iter()
        .filter(|&candidate| is_consistent(candidate, history))
        .collect()
}
