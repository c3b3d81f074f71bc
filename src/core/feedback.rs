//! Wordle tile feedback calculation and representation
//!
//! Feedback is a fixed array of five tiles:
//! - Absent (grey): letter not in the target, or all its occurrences already used
//! - Present (yellow): letter in the target, wrong position
//! - Correct (green): letter in the correct position
//!
//! Each feedback also has a compact base-3 encoding (0-242), where each position
//! contributes digit × 3^position, used when bucketing candidates by outcome.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use serde::{Deserialize, Serialize};

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Grey
    #[serde(rename = "grey")]
    Absent,
    /// Yellow
    #[serde(rename = "yellow")]
    Present,
    /// Green
    #[serde(rename = "green")]
    Correct,
}

impl Tile {
    /// Base-3 digit of this tile
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Tile feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([Tile; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Tile::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Get the tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.0.iter().all(|&tile| tile == Tile::Correct)
    }

    /// Base-3 encoding of the feedback (0-242)
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
            .iter()
            .rev()
            .fold(0u8, |acc, tile| acc * 3 + tile.digit())
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_nine::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut tiles = [Tile::Absent; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Tile::Correct,
                'Y' | 'y' | '🟨' => Tile::Present,
                '-' | '_' | '⬜' => Tile::Absent,
                _ => return None,
            };
        }

        Some(Self(tiles))
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_nine::core::Feedback;
    ///
    /// let f = Feedback::parse("GY-GY").unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|tile| tile.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `target` using Wordle's duplicate-letter rules
///
/// # Algorithm
/// 1. Every position starts Absent
/// 2. First pass: exact matches become Correct and consume one occurrence of the
///    letter from the target's remaining counts
/// 3. Second pass, left to right over the rest: a letter with remaining count
///    becomes Present and consumes one occurrence
///
/// Both words are already validated `Word`s, so lengths always agree.
///
/// # Examples
/// ```
/// use wordle_nine::core::{Tile, Word, score};
///
/// let guess = Word::new("crate").unwrap();
/// let target = Word::new("crane").unwrap();
///
/// assert_eq!(
///     score(&guess, &target).tiles(),
///     &[Tile::Correct, Tile::Correct, Tile::Correct, Tile::Absent, Tile::Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    let mut tiles = [Tile::Absent; WORD_LENGTH];
    let mut remaining: [u8; ALPHABET_SIZE] = target.letter_counts();

    let guess_chars = guess.chars();
    let target_chars = target.chars();

    for (i, tile) in tiles.iter_mut().enumerate() {
        if guess_chars[i] == target_chars[i] {
            *tile = Tile::Correct;
            remaining[letter_index(guess_chars[i])] -= 1;
        }
    }

    for (i, tile) in tiles.iter_mut().enumerate() {
        if *tile == Tile::Correct {
            continue;
        }

        let count = &mut remaining[letter_index(guess_chars[i])];
        if *count > 0 {
            *tile = Tile::Present;
            *count -= 1;
        }
    }

    Feedback(tiles)
}
